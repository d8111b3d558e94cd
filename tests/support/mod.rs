//! Shared fixtures for integration tests.

#![allow(dead_code)]

use native_windivert_packager::error::Result;
use native_windivert_packager::metadata::VersionControl;
use native_windivert_packager::workspace::WORKSPACE_MARKER;
use std::io::{Read, Write};
use std::path::Path;
use url::Url;

/// Builds a release archive shaped like the upstream WinDivert zip.
pub struct ReleaseZip {
    entries: Vec<(String, Vec<u8>)>,
}

impl ReleaseZip {
    /// A complete release under `WinDivert-<version>-A/`.
    pub fn complete(version: &str) -> Self {
        let root = format!("WinDivert-{version}-A");
        Self {
            entries: vec![
                (format!("{root}/VERSION"), version.as_bytes().to_vec()),
                (format!("{root}/LICENSE"), b"license text".to_vec()),
                (format!("{root}/x64/WinDivert.dll"), b"dll".to_vec()),
                (format!("{root}/x64/WinDivert64.sys"), b"sys".to_vec()),
                (format!("{root}/x86/WinDivert.dll"), b"dll32".to_vec()),
            ],
        }
    }

    pub fn without(mut self, suffix: &str) -> Self {
        self.entries.retain(|(name, _)| !name.ends_with(suffix));
        self
    }

    /// Loose files only, with no enclosing directory.
    pub fn flat(version: &str) -> Self {
        Self {
            entries: vec![
                ("VERSION".to_string(), version.as_bytes().to_vec()),
                ("LICENSE".to_string(), b"license text".to_vec()),
                ("WinDivert.dll".to_string(), b"dll".to_vec()),
            ],
        }
    }

    pub fn with(mut self, name: &str, content: &[u8]) -> Self {
        self.entries.push((name.to_string(), content.to_vec()));
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = zip::write::SimpleFileOptions::default();
            for (name, content) in &self.entries {
                writer.start_file(name.as_str(), options).unwrap();
                writer.write_all(content).unwrap();
            }
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }
}

/// Serves a single HTTP 200 response with `body` from a background thread.
pub fn serve_once(body: Vec<u8>) -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
    });
    Url::parse(&format!("http://{addr}/WinDivert.zip")).unwrap()
}

/// Version control with fixed answers.
pub struct FakeVcs {
    pub user_name: String,
    pub remotes: Vec<(String, String)>,
}

impl FakeVcs {
    pub fn new(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
            remotes: Vec::new(),
        }
    }

    pub fn with_remote(mut self, name: &str, url: &str) -> Self {
        self.remotes.push((name.to_string(), url.to_string()));
        self
    }
}

impl VersionControl for FakeVcs {
    async fn user_name(&self) -> Result<String> {
        Ok(self.user_name.clone())
    }

    async fn list_remotes(&self) -> Result<Vec<String>> {
        Ok(self.remotes.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn remote_url(&self, remote: &str) -> Result<String> {
        Ok(self
            .remotes
            .iter()
            .find(|(name, _)| name == remote)
            .map(|(_, url)| url.clone())
            .unwrap_or_default())
    }
}

/// Creates a base directory holding the tool readme.
pub fn base_dir() -> tempfile::TempDir {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("ReadMe.md"), "# Native.WinDivert\n").unwrap();
    temp
}

/// Reads one entry of a zip file as text.
pub fn read_entry(package: &Path, name: &str) -> String {
    let file = std::fs::File::open(package).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

/// Names of all entries in a zip file.
pub fn entry_names(package: &Path) -> Vec<String> {
    let file = std::fs::File::open(package).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    archive.file_names().map(String::from).collect()
}

/// Files in a directory apart from the workspace marker, or none when it
/// does not exist.
pub fn list_dir(dir: &Path) -> Vec<String> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name != WORKSPACE_MARKER)
            .collect(),
        Err(_) => Vec::new(),
    }
}

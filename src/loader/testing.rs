//! Fixture builders shared by the loader tests.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use zip::{write::FileOptions, ZipWriter};

/// Write each `(name, bytes)` pair as a file under `dir`.
pub fn write_files(dir: &Path, files: &[(&str, &[u8])]) {
    for (name, data) in files {
        fs::write(dir.join(name), data).unwrap();
    }
}

pub fn write_zip(path: &Path, files: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o755);
    for (name, data) in files {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
            continue;
        }
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
}

pub fn write_tar(path: &Path, files: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut builder = tar::Builder::new(file);
    for (name, data) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, *data).unwrap();
    }
    builder.finish().unwrap();
}

/// Collects every progress report.
#[derive(Default)]
pub struct Recorder {
    pub values: Vec<f32>,
}

impl Recorder {
    pub fn callback(&mut self) -> impl FnMut(f32) + '_ {
        move |p| self.values.push(p)
    }

    pub fn assert_monotonic_to_100(&self) {
        assert!(self.values.windows(2).all(|w| w[0] <= w[1]), "{:?}", self.values);
        assert_eq!(Some(&100.0), self.values.last());
    }
}

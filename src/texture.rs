use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{anyhow, Context, Result};

/// Decoded RGBA8 pixels; the shader reads coverage from the green channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaMapImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl AlphaMapImage {
    /// Coverage at a texel, as sampled by the decal shader
    pub fn coverage(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = ((y * self.width + x) * 4 + 1) as usize;
        self.rgba.get(index).copied()
    }
}

pub fn decode_alpha_map(path: &Path) -> Result<AlphaMapImage> {
    let img = image::open(path).with_context(|| format!("Failed to load alpha map: {:?}", path))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(AlphaMapImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Decodes an alpha map off the render thread
///
/// The frame loop keeps running while the file loads; poll between frames.
pub struct AlphaMapLoader {
    path: PathBuf,
    rx: Option<Receiver<Result<AlphaMapImage>>>,
}

impl AlphaMapLoader {
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel();
        let worker_path = path.clone();

        let spawned = thread::Builder::new()
            .name("alpha-map-loader".into())
            .spawn(move || {
                // The receiver may be gone if the app already quit
                let _ = tx.send(decode_alpha_map(&worker_path));
            });

        // A failed spawn drops the sender, so poll reports it as a disconnect
        if let Err(e) = spawned {
            log::warn!("could not start texture loader thread: {}", e);
        }

        Self { path, rx: Some(rx) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Result of the load once it has finished; yields it only once
    pub fn poll(&mut self) -> Option<Result<AlphaMapImage>> {
        let rx = self.rx.as_ref()?;

        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                Some(Err(anyhow!("texture loader for {:?} exited without a result", self.path)))
            }
        }
    }
}

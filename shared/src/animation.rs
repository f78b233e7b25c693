use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::buffer::ConvertBuffer;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, GrayImage, RgbaImage};
use log::{debug, info};

use crate::grid::Grid;
use crate::{Error, Result};

/// Default frame delay, in hundredths of a second.
pub const DELAY: u16 = 25;

/// Step the grid `generations` times and render every new generation.
///
/// The starting generation is not rendered, so the result always holds
/// exactly `generations` frames.
pub fn simulate<F>(grid: &mut Grid, generations: usize, mut render: F) -> Vec<GrayImage>
where
    F: FnMut(&Grid) -> GrayImage,
{
    let mut frames = Vec::with_capacity(generations);
    let mut stable = false;

    for generation in 1..=generations {
        let changed = grid.step();
        if !changed && !stable {
            info!("pattern stable from generation {generation}");
            stable = true;
        }
        debug!("generation {generation}: {} alive", grid.population());
        frames.push(render(grid));
    }

    frames
}

/// A finished sequence of frames ready to be written as a GIF.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<GrayImage>,
    delay: u16,
    loop_count: u16,
}

impl Animation {
    /// Loops once per frame by default.
    pub fn new(frames: Vec<GrayImage>) -> Self {
        let loop_count = u16::try_from(frames.len()).unwrap_or(u16::MAX);
        Animation {
            frames,
            delay: DELAY,
            loop_count,
        }
    }

    /// Delay between frames, in hundredths of a second.
    pub fn with_delay(mut self, delay: u16) -> Self {
        self.delay = delay;
        self
    }

    /// A loop count of zero repeats forever.
    pub fn with_loop_count(mut self, loop_count: u16) -> Self {
        self.loop_count = loop_count;
        self
    }

    pub fn frames(&self) -> &[GrayImage] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn delay(&self) -> u16 {
        self.delay
    }

    pub fn loop_count(&self) -> u16 {
        self.loop_count
    }

    pub fn encode<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = GifEncoder::new(writer);
        encoder.set_repeat(match self.loop_count {
            0 => Repeat::Infinite,
            n => Repeat::Finite(n),
        })?;

        let delay = Delay::from_numer_denom_ms(u32::from(self.delay) * 10, 1);
        encoder.encode_frames(self.frames.iter().map(|frame| {
            let rgba: RgbaImage = frame.convert();
            Frame::from_parts(rgba, 0, 0, delay)
        }))?;
        Ok(())
    }

    /// Encode the whole animation, then replace `path` with it.
    ///
    /// The bytes go to a sibling temporary file named after this process
    /// first, so a failed run never leaves a partial GIF at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut bytes = Vec::new();
        self.encode(&mut bytes)?;
        debug!("encoded {} frames into {} bytes", self.len(), bytes.len());

        let staging = staging_path(path);
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Err(source) = fs::write(&staging, &bytes) {
            let _ = fs::remove_file(&staging);
            return Err(io_error(source));
        }
        if let Err(source) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(io_error(source));
        }

        info!("wrote {} frames to {}", self.len(), path.display());
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::animation::{simulate, Animation};
use shared::grid::Grid;
use shared::render::Renderer;
use shared::Error;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gif-of-life-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn random_animation(width: usize, height: usize, generations: usize) -> Animation {
    let mut grid = Grid::new(width, height).unwrap();
    grid.randomize(&mut StdRng::seed_from_u64(2024), 0.5).unwrap();
    let renderer = Renderer::default();
    Animation::new(simulate(&mut grid, generations, |g| renderer.render(g)))
}

fn decode(path: &PathBuf) -> Vec<image::Frame> {
    let bytes = fs::read(path).unwrap();
    GifDecoder::new(Cursor::new(bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

#[test]
fn saved_gif_holds_one_frame_per_generation() {
    let dir = scratch_dir("frames");
    let path = dir.join("life.gif");

    random_animation(12, 8, 6).save(&path).unwrap();

    let frames = decode(&path);
    assert_eq!(frames.len(), 6);
    for frame in &frames {
        assert_eq!(frame.buffer().dimensions(), (60, 40));
    }
    let leftovers: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec!["life.gif"]);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn save_replaces_an_existing_file() {
    let dir = scratch_dir("replace");
    let path = dir.join("life.gif");
    fs::write(&path, vec![0xAB; 1 << 20]).unwrap();

    let animation = random_animation(4, 4, 2);
    animation.save(&path).unwrap();

    let mut expected = Vec::new();
    animation.encode(&mut expected).unwrap();
    assert_eq!(fs::read(&path).unwrap(), expected);
    assert_eq!(decode(&path).len(), 2);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = scratch_dir("missing");
    let path = dir.join("no-such-dir").join("life.gif");

    let err = random_animation(3, 3, 1).save(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.to_string(), format!("failed to write {}", path.display()));
    assert!(!path.exists());
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn same_seed_gives_same_animation() {
    let a = random_animation(10, 10, 5);
    let b = random_animation(10, 10, 5);
    assert_eq!(a.frames(), b.frames());
}

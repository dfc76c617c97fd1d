//! Storyboard assembly pipeline.
//!
//! Drives the two generation stages: one structured scene-extraction call,
//! then an independent image-synthesis call per scene. Extraction failure
//! aborts the request; per-scene synthesis failures only drop that scene.

pub mod storyboard;

pub use storyboard::{ImageSynthesizer, SceneExtractor, StoryboardPipeline};

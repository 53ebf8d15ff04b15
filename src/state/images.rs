//! Lazy image loading.
//!
//! Images ship with their real source in `data-src`. Once an image nears the
//! viewport its source is copied into `src` and it is marked `loaded`. Hosts
//! without intersection support leave the images as authored.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::consts::LOADED_CLASS;
use crate::effect::{Effect, Target};

#[derive(Clone, Debug)]
struct LazyImage {
    source: String,
    loaded: bool,
}

#[derive(Clone, Debug)]
pub struct LazyImages {
    images: Vec<LazyImage>,
    enabled: bool,
}

impl LazyImages {
    #[must_use]
    pub fn new(sources: Vec<String>, intersection_supported: bool) -> Self {
        let images = sources.into_iter().map(|source| LazyImage { source, loaded: false }).collect();
        Self { images, enabled: intersection_supported }
    }

    /// Whether deferred loading is active on this host.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.images.get(index).is_some_and(|i| i.loaded)
    }

    pub fn load(&mut self, index: usize, out: &mut Vec<Effect>) {
        if !self.enabled {
            return;
        }
        let Some(image) = self.images.get_mut(index) else {
            return;
        };
        if image.loaded {
            return;
        }
        image.loaded = true;
        out.push(Effect::SetAttribute { target: Target::LazyImage(index), name: "src", value: image.source.clone() });
        out.push(Effect::class(Target::LazyImage(index), LOADED_CLASS, true));
    }
}

// this_file: src/foo.rs

use harfbuzz_rs::Language;

use crate::engine::TextEngine;
use crate::error::Result;

/// One integer with the text stack at its back.
///
/// A `Foo` is created with an initial value and brings the text engines up
/// with it. The value is read with [`x`](Foo::x) and replaced with
/// [`set_x`](Foo::set_x); the engines stay up until the `Foo` drops.
#[derive(Debug)]
pub struct Foo {
    x: i32,
    engine: TextEngine,
}

impl Foo {
    /// Creates a `Foo` holding `x`.
    ///
    /// Engine bring-up failure is returned, not swallowed.
    pub fn new(x: i32) -> Result<Self> {
        let engine = TextEngine::init()?;
        log::debug!("created with x = {}", x);
        Ok(Self { x, engine })
    }

    /// The stored value.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Stores `x`, overwriting the previous value.
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    /// Language the shaping engine reported as the process default.
    pub fn language(&self) -> Language {
        self.engine.default_language()
    }

    /// The engine handles owned by this value.
    pub fn engine(&self) -> &TextEngine {
        &self.engine
    }
}

//! Foo: one integer riding on the text stack.
//!
//! [`Foo`] stores a single `i32` and keeps the two external text engines it
//! was born with alive for its whole lifetime: a FreeType rasterizer handle
//! and the HarfBuzz process-default language. The handle is acquired in the
//! constructor and released exactly once when the value drops.
//!
//! ```rust,no_run
//! use foo::Foo;
//!
//! let mut foo = Foo::new(42)?;
//! assert_eq!(foo.x(), 42);
//!
//! foo.set_x(7);
//! assert_eq!(foo.x(), 7);
//!
//! let _lang = foo.language();
//! # Ok::<(), foo::FooError>(())
//! ```

mod engine;
mod error;
mod foo;

pub use engine::TextEngine;
pub use error::{FooError, Result};
pub use foo::Foo;

// The language tag type callers get back from [`Foo::language`].
pub use harfbuzz_rs::Language;

// this_file: tests/integration.rs

//! Integration tests for the public Foo surface.

use foo::{Foo, TextEngine};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_value_round_trips_through_setter() {
    init_logging();
    let mut foo = Foo::new(1).expect("engine bring-up");
    for v in [i32::MIN, -128, 0, 1, 65_536, i32::MAX] {
        foo.set_x(v);
        assert_eq!(foo.x(), v);
    }
}

#[test]
fn test_repeated_construct_and_drop_is_safe() {
    init_logging();
    // Handle acquire/release must stay paired across many lifecycles.
    for i in 0..16 {
        let foo = Foo::new(i).expect("engine bring-up");
        assert_eq!(foo.x(), i);
    }
}

#[test]
fn test_default_language_is_stable_across_instances() {
    init_logging();
    let a = Foo::new(1).expect("engine bring-up");
    let b = Foo::new(2).expect("engine bring-up");
    assert!(
        a.language() == b.language(),
        "process default language should not vary between instances"
    );
}

#[test]
fn test_rasterizer_handle_is_borrowable() {
    init_logging();
    let engine = TextEngine::init().expect("engine bring-up");
    let _raster = engine.raster();
    assert_eq!(format!("{:?}", engine), "TextEngine { .. }");
}

#[test]
fn test_engine_initializes_standalone() {
    init_logging();
    // Two live engines mean two live rasterizer handles; both must come up
    // and agree on the process default language.
    let engine = TextEngine::init().expect("engine bring-up");
    let again = TextEngine::init().expect("engine bring-up");
    assert!(
        engine.default_language() == again.default_language(),
        "process default language should not vary between engines"
    );
}

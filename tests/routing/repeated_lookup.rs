use std::sync::Arc ;
use isoload::{ DelegatingRouter, DescriptorFormat, PluginRoot };

#[test]
fn routing_test_lookups_are_stable_after_initialization() {

    let root = tempfile::tempdir().expect( "Failed to create temp root" );
    crate::fixture_tree::write_bundle( root.path(), "sink", &[ "demo.Sink" ], &[( "demo.Sink", "class Sink" )]);

    let router = DelegatingRouter::initialize(
        &[ PluginRoot::new( root.path() )],
        &DescriptorFormat,
        &crate::fixture_tree::empty_parent(),
    ).expect( "Initialization failed" );

    let first = router.resolve( "demo.Sink" ).expect( "Expected class" );
    let second = router.resolve( "demo.Sink" ).expect( "Expected class" );
    assert_eq!( first, second );

    let first_owner = router.namespace_of( "demo.Sink" ).expect( "Expected namespace" );
    let second_owner = router.namespace_of( "demo.Sink" ).expect( "Expected namespace" );
    assert!( Arc::ptr_eq( first_owner, second_owner ));

    assert!( router.resolve( "demo.Unknown" ).is_err() );
    assert!( router.resolve( "demo.Unknown" ).is_err() );

}

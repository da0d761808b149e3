use isoload::{ DelegatingRouter, DescriptorFormat, Namespace, NotFound, PluginRoot };

#[test]
fn routing_test_unexported_classes_are_not_routed() {

    let root = tempfile::tempdir().expect( "Failed to create temp root" );
    crate::fixture_tree::write_bundle(
        root.path(),
        "sink",
        &[ "demo.Sink" ],
        &[( "demo.Sink", "class Sink" ), ( "demo.internal.Pool", "class Pool" )],
    );

    let router = DelegatingRouter::initialize(
        &[ PluginRoot::new( root.path() )],
        &DescriptorFormat,
        &crate::fixture_tree::empty_parent(),
    ).expect( "Initialization failed" );

    assert_eq!(
        router.resolve( "demo.internal.Pool" ).expect_err( "Expected NotFound" ),
        NotFound( "demo.internal.Pool".to_string() ),
    );

    // Still reachable through the owning namespace's own lookup.
    let namespace = router.namespace_of( "demo.Sink" ).expect( "Expected namespace" );
    assert_eq!(
        namespace.resolve( "demo.internal.Pool" ).expect( "Expected private class" ).body(),
        "class Pool",
    );

}

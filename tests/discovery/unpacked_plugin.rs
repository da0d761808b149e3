use isoload::{ scan, DescriptorFormat, PluginRoot, SourceKind };

#[test]
fn discovery_test_unpacked_plugin_directory() {

    let root = tempfile::tempdir().expect( "Failed to create temp root" );
    crate::fixture_tree::write_unpacked(
        root.path(),
        "raw-plugin",
        &[ "raw.Transform" ],
        &[( "raw.Transform", "class Transform" )],
    );

    let sources = scan( &[ PluginRoot::new( root.path() )], &DescriptorFormat )
        .expect( "Scan failed" );

    assert_eq!( sources.len(), 1 );
    assert_eq!( sources[0].kind(), SourceKind::TopLevelDirectory );
    assert!( sources[0].path().ends_with( "raw-plugin" ));

}

#[test]
fn discovery_test_archives_take_precedence_over_unpacked_layout() {

    let root = tempfile::tempdir().expect( "Failed to create temp root" );
    let bundle = crate::fixture_tree::write_bundle(
        root.path(),
        "mixed",
        &[ "mixed.Main" ],
        &[( "mixed.Main", "class Main" )],
    );
    std::fs::write( bundle.join( "plugin.toml" ), crate::fixture_tree::descriptor( &[], &[] ))
        .expect( "Failed to write descriptor" );

    let sources = scan( &[ PluginRoot::new( root.path() )], &DescriptorFormat )
        .expect( "Scan failed" );

    assert_eq!( sources.len(), 1 );
    assert_eq!( sources[0].kind(), SourceKind::BundleDirectory );

}

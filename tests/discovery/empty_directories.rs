use isoload::{ scan, DescriptorFormat, PluginRoot };

#[test]
fn discovery_test_empty_root_yields_no_sources() {

    let root = tempfile::tempdir().expect( "Failed to create temp root" );

    let sources = scan( &[ PluginRoot::new( root.path() )], &DescriptorFormat )
        .expect( "Scan failed" );

    assert!( sources.is_empty() );

}

#[test]
fn discovery_test_unrecognisable_content_yields_no_sources() {

    let root = tempfile::tempdir().expect( "Failed to create temp root" );
    std::fs::create_dir( root.path().join( "empty-plugin" )).expect( "Failed to create dir" );
    let cluttered = root.path().join( "cluttered" );
    std::fs::create_dir( &cluttered ).expect( "Failed to create dir" );
    std::fs::write( cluttered.join( "data.bin" ), [ 0u8, 1, 2 ]).expect( "Failed to write file" );

    let sources = scan( &[ PluginRoot::new( root.path() )], &DescriptorFormat )
        .expect( "Scan failed" );

    assert!( sources.is_empty() );

}

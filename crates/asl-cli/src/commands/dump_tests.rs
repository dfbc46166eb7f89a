use asl_core::ActionLayer;
use asl_lib::compile;

use super::dump::write_cache;

#[test]
fn cache_reads_back_as_a_layer_list() {
    let layers = compile("layer Player:\n    action Jump: bool, once\nlayer Menu:\n").unwrap();
    let path = std::env::temp_dir().join(format!("asl-dump-{}.bin", std::process::id()));

    write_cache(&layers, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(ActionLayer::list_from_bytes(&bytes).unwrap(), layers);
}

//! Kept in its own test binary: replacing the global configuration would
//! otherwise race with tests that build from the defaults.

use std::sync::Arc;

use orcfile_objectstore::{NullObjectStore, url::ObjectUrl};
use orcfile_reader::{DEFAULT_MAX_DISK_RANGE_CHUNK_LIMIT, DataReaderProperties, ReaderConf};

fn build(builder: orcfile_reader::DataReaderPropertiesBuilder) -> DataReaderProperties {
    builder
        .with_file_system(Arc::new(NullObjectStore))
        .with_path(ObjectUrl::parse("file:///a/b.orc").unwrap())
        .build()
        .unwrap()
}

#[test]
fn test_global_conf_seeds_new_builders() {
    assert_eq!(
        ReaderConf::global().max_disk_range_chunk_limit,
        DEFAULT_MAX_DISK_RANGE_CHUNK_LIMIT
    );
    let before = DataReaderProperties::builder();
    assert_eq!(
        build(DataReaderProperties::builder()).max_disk_range_chunk_limit(),
        DEFAULT_MAX_DISK_RANGE_CHUNK_LIMIT
    );

    ReaderConf::set_global(ReaderConf::default().with_max_disk_range_chunk_limit(1 << 20));

    assert_eq!(
        build(DataReaderProperties::builder()).max_disk_range_chunk_limit(),
        1 << 20
    );
    assert_eq!(
        build(before).max_disk_range_chunk_limit(),
        DEFAULT_MAX_DISK_RANGE_CHUNK_LIMIT
    );

    ReaderConf::set_global(ReaderConf::default());
    assert_eq!(*ReaderConf::global(), ReaderConf::default());
}

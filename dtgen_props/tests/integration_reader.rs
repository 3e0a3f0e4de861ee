//! Integration tests for the build.prop reader.
//!
//! These tests verify that:
//! - `BuildProp::from_file` round-trips through a real file
//! - vendor-flavored property aliases resolve the same record
//! - missing required properties surface as typed errors

use std::io::Write;

use dtgen_props::{BuildProp, DeviceArch, Error, PropField};
use tempfile::NamedTempFile;

fn write_prop_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(content.as_bytes())
        .expect("temp file should be writable");
    file
}

#[test]
fn reads_device_record_from_file() {
    let file = write_prop_file(
        "\
ro.product.device=beryllium
ro.product.manufacturer=Xiaomi
ro.product.brand=Xiaomi
ro.product.model=POCO F1
ro.board.platform=sdm845
ro.product.cpu.abilist=arm64-v8a,armeabi-v7a,armeabi
ro.build.ab_update=true
",
    );

    let props = BuildProp::from_file(file.path()).expect("file should parse");
    let info = props.info();

    assert_eq!(info.codename, "beryllium");
    assert_eq!(info.manufacturer, "xiaomi");
    assert_eq!(info.model, "POCO F1");
    assert_eq!(info.arch, DeviceArch::Arm64);
    assert!(info.device_is_ab);
    assert!(info.device_has_64bit_arch);
}

#[test]
fn vendor_aliases_resolve_the_record() {
    let file = write_prop_file(
        "\
ro.vendor.device=surya
ro.product.vendor.manufacturer=XIAOMI
ro.product.vendor.brand=POCO
ro.product.vendor.model=POCO X3 NFC
ro.hardware.keystore=sm6350
ro.product.cpu.abi=arm64-v8a
",
    );

    let props = BuildProp::from_file(file.path()).expect("file should parse");
    let info = props.info();

    assert_eq!(info.codename, "surya");
    assert_eq!(info.manufacturer, "xiaomi");
    assert_eq!(info.brand, "POCO");
    assert_eq!(info.platform, "sm6350");
    assert!(!info.device_is_ab);
}

#[test]
fn missing_platform_is_a_typed_error() {
    let file = write_prop_file(
        "\
ro.product.device=lavender
ro.product.manufacturer=Xiaomi
ro.product.brand=Xiaomi
ro.product.model=Redmi Note 7
ro.product.cpu.abi=arm64-v8a
",
    );

    let err = BuildProp::from_file(file.path()).expect_err("parse should fail");
    assert!(matches!(err, Error::MissingProperty(PropField::Platform)));
    assert_eq!(
        err.to_string(),
        "device platform could not be found in build.prop"
    );
}

#[test]
fn unreadable_path_is_an_io_error() {
    let err = BuildProp::from_file("/nonexistent/build.prop").expect_err("read should fail");
    assert!(matches!(err, Error::Io(_)));
}

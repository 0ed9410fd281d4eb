//! Integration smoke tests for `uni_admissions`

use uni_admissions::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

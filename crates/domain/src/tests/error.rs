// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidPageSize { size: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid page size: 0. Must be greater than 0"
    );

    let err: DomainError = DomainError::InvalidOperation(String::from("UPSERT"));
    assert_eq!(format!("{err}"), "Invalid operation: 'UPSERT'");

    let err: DomainError = DomainError::InvalidResourceType(String::from("venues"));
    assert_eq!(format!("{err}"), "Invalid resource type: 'venues'");
}

#[test]
fn test_domain_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_err: &E) {}

    let err: DomainError = DomainError::InvalidPageSize { size: 0 };
    assert_error(&err);
}

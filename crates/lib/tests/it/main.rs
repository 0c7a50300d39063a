/*! Integration tests for the Kratix SDK.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - document: Path parsing, get/set/remove, scopes, merge and codec
 * - resource: Resource, Promise and Status wrappers
 * - sdk: Pipeline file layout and status publication
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("kratix_sdk=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod document;

/// Binary entrypoint for the `klip` executable.
///
/// Keeps the binary thin — all business logic lives in the `klip_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    klip_lib::run();
}

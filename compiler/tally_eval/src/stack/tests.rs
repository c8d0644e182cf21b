use super::*;
use pretty_assertions::assert_eq;

// Each level pins a kilobyte, so fifty thousand levels need far more than
// the default test thread stack.
fn nest(depth: u32) -> u32 {
    let pad = std::hint::black_box([0u8; 1024]);
    if depth == 0 {
        return u32::from(pad[0]);
    }
    with_headroom(|| 1 + nest(depth - 1))
}

#[test]
fn deep_host_recursion_completes() {
    assert_eq!(nest(50_000), 50_000);
}

#[test]
fn returns_the_step_result() {
    assert_eq!(with_headroom(|| "done"), "done");
}

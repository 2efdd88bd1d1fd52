use super::*;

#[test]
fn calls_a_popped_target() {
    let mut process = run_image(image![(Ldi, 3), (Cal), (Hcf), (Ldi, 13), (Ret)]);
    assert_eq!(pop(&mut process), q!(13));
}

#[test]
fn fractional_targets_reach_heap_code() {
    // Copy the image's own routine into a fresh array and call it
    // there: code and data share one address space.
    let mut process = run_image(image![
        (New, 2),    // [b]
        (Dup),       // [b, b]
        (Lds, 12),   // [b, b, word]
        (Swp),       // [b, word, b]
        (Std, 0),    // mem[b] = ldi 13
        (Dup),       // [b, b]
        (Lds, 13),   // [b, b, word]
        (Swp),       // [b, word, b]
        (Std, 1),    // mem[b + 1] = ret
        (Dup),       // [b, b]
        (Cal),       // call into the array
        (Hcf),
        (Ldi, 13),   // the routine template
        (Ret)
    ]);

    assert_eq!(pop(&mut process), q!(13));
}

#![no_main]
// Field arithmetic on arbitrary (possibly non-canonical) encodings.
use curve25519::{FieldElement, MontgomeryPoint, subtle::ConditionallySelectable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let mut bytes = [[0u8; 32]; 3];
    for (i, chunk) in bytes.iter_mut().enumerate() {
        chunk.copy_from_slice(&data[32 * i..32 * (i + 1)]);
    }
    let [a, b, c] = bytes.map(|b| FieldElement::from_bytes(&b));

    // Encoding is canonical and stable.
    let encoded = a.to_bytes();
    assert!(encoded[31] & 0x80 == 0);
    assert_eq!(FieldElement::from_bytes(&encoded), a);

    assert_eq!((a + b) * c, a * c + b * c);
    assert_eq!(a - b + b, a);
    assert_eq!(a.square(), a * a);
    assert_eq!(a + (-a), FieldElement::ZERO);

    let inverse = a.invert();
    if bool::from(a.is_zero()) {
        assert_eq!(inverse, FieldElement::ZERO);
    } else {
        assert_eq!(a * inverse, FieldElement::ONE);
    }

    let selected = FieldElement::conditional_select(&a, &b, (data[0] & 1).into());
    assert_eq!(selected, if data[0] & 1 == 1 { b } else { a });

    // Predicates must not panic on any encoding.
    let point = MontgomeryPoint(bytes[0]);
    let _ = point.is_low_order();
    let _ = point.is_on_curve();
});

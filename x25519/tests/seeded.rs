//! Reproducible key generation from a seeded RNG.

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use x25519::{EphemeralSecret, Secret, curve25519::MontgomeryScalar};

#[test]
fn same_seed_same_keys() {
    let mut rng_a = ChaCha20Rng::seed_from_u64(7748);
    let mut rng_b = ChaCha20Rng::seed_from_u64(7748);

    for _ in 0..8 {
        let a = Secret::random(&mut rng_a);
        let b = Secret::random(&mut rng_b);
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_eq!(a.public_key(), b.public_key());
        assert!(MontgomeryScalar::is_clamped(a.as_bytes()));
    }
}

#[test]
fn different_seeds_different_keys() {
    let a = Secret::random(&mut ChaCha20Rng::seed_from_u64(1));
    let b = Secret::random(&mut ChaCha20Rng::seed_from_u64(2));
    assert_ne!(a.public_key(), b.public_key());
}

#[test]
fn many_exchanges() {
    let mut rng = ChaCha20Rng::from_seed([0x25; 32]);

    for _ in 0..32 {
        let alice = Secret::random(&mut rng);
        let bob = EphemeralSecret::random(&mut rng);
        let alice_public = alice.public_key();
        let bob_public = bob.public_key();

        let alice_shared = alice.diffie_hellman(&bob_public).unwrap();
        let bob_shared = bob.diffie_hellman(&alice_public).unwrap();
        assert_eq!(alice_shared.as_bytes(), bob_shared.as_bytes());
    }
}

#![no_main]
// Decodes attacker-controlled public keys and runs exchanges against them.
use ciborium::de;
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use x25519::{Error, PublicKey, Secret, ecdh, x25519, x25519_unchecked};

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let mut seed = [0u8; 32];
    seed.copy_from_slice(&data[0..32]);
    let mut rng = ChaChaRng::from_seed(seed);
    let secret = Secret::random(&mut rng);

    let mut private_key = [0u8; 32];
    private_key.copy_from_slice(&data[32..64]);
    let mut peer = [0u8; 32];
    peer.copy_from_slice(&data[64..96]);

    // Checked and unchecked paths agree whenever the checked one succeeds.
    let checked = x25519(private_key, peer);
    let unchecked = x25519_unchecked(private_key, peer);
    match checked {
        Ok(shared) => {
            assert_eq!(shared, unchecked);
            assert_ne!(shared, [0u8; 32]);
        }
        Err(err) => assert_eq!(err, Error::InvalidPeerKey),
    }
    assert_eq!(ecdh::shared_secret(&private_key, &peer), checked);

    // A peer key either decodes and takes part in a commutative exchange, or
    // is refused everywhere.
    match PublicKey::from_bytes(&peer) {
        Ok(public_key) => {
            let shared = secret.diffie_hellman(&public_key);
            assert!(shared.is_ok());
        }
        Err(err) => {
            assert_eq!(err, Error::InvalidPeerKey);
            let public_key = PublicKey::from(peer);
            assert!(secret.diffie_hellman(&public_key).is_err());
        }
    }

    let own_public = ecdh::generate_keys(&mut private_key);
    if let Ok(shared) = ecdh::shared_secret(&private_key, &secret.public_key().to_bytes()) {
        let own = PublicKey::from(own_public);
        let other = secret.diffie_hellman(&own).map(|s| s.to_bytes());
        assert_eq!(other, Ok(shared));
    }

    // Deserialization of the remaining bytes must never panic.
    let _: Result<PublicKey, _> = de::from_reader(&data[96..]);
});

//! Known-answer tests for Hash_DRBG with SHA-256.
//!
//! Both tests follow the NIST CAVP DRBG validation procedure: instantiate
//! (and reseed, for the second record), generate two full-length blocks, and
//! compare the second block against the expected bits. The expected outputs
//! are pinned against independent SP 800-90A Hash_DRBG implementations.

use drbg_crypto::HashDrbg;

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex in test vector")
}

#[test]
fn hash_drbg_sha256_no_reseed() {
    let entropy = unhex("63363377e41e86468deb0ab4a8ed683f6a134e47e014c700454e81e95358a569");
    let nonce = unhex("808aa38f2a72a62359915a9f8a04ca68");
    let expected = unhex(
        "746502c71402d4f4427a3919192d1defde15f7406d18e5007417d866b52fe010\
         c19be57968d4a3d152633942a7f50fd0a7e192d9062aa7506e0f577eaa0c9c35\
         8fb3bec20e6b447e1fbd56e3bd4eeb67223264853c93b04b293211e86bf604cc\
         12ed08a2ba21695507b8dd4858faa181cdc9ff4ad2df518f9636e9d5ab52024c",
    );

    let mut drbg = HashDrbg::new(&entropy, &nonce, &[]).unwrap();

    let mut out = vec![0u8; expected.len()];
    drbg.generate(&mut out, None).unwrap();
    drbg.generate(&mut out, None).unwrap();

    assert_eq!(out, expected);
}

#[test]
fn hash_drbg_sha256_with_reseed() {
    let entropy = unhex("06032cd5eed33f39265f49ecb142c511da9aff2af71203bffaf34a9ca5bd9c0d");
    let nonce = unhex("0e66f71edc43e42a45ad3c6fc6cdc4df");
    let entropy_reseed = unhex("01920a4e669ed3a85ae8a33b35a74ad7fb2a6bb4cf395ce00334a9c9a5a5d552");
    let expected = unhex(
        "5054d0f8dc2eb1b67e6acb623d0a3747d1af4e7fe48607e90d0332e470e230aa\
         fa203e2a3735fb9c2f37bbeabf9489a5a92aec8f9016e5ed778c60bc3f626e94\
         5f2d4209131c86ca4ae2bfce5e943bbe0458cebf3426075f1c99b887a2e41cc2\
         bff31ea248854e0ee87dbc80146bef26195e90718531c2c7609936f1fd8941e3",
    );

    let mut drbg = HashDrbg::new(&entropy, &nonce, &[]).unwrap();
    drbg.reseed(&entropy_reseed, &[]).unwrap();

    let mut out = vec![0u8; expected.len()];
    drbg.generate(&mut out, None).unwrap();
    drbg.generate(&mut out, None).unwrap();

    assert_eq!(out, expected);
}

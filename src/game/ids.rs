//! Identifier generation
//!
//! The controller asks an [`IdGenerator`] for every new player and round id.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use uuid::Builder;

/// Source of fresh, unique, opaque ids
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Random v4 UUIDs from the thread RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}

/// v4 UUIDs from a seeded PCG stream (reproducible runs)
#[derive(Debug, Clone)]
pub struct SeededIds {
    rng: Pcg32,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for SeededIds {
    fn next_id(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}

/// Readable ids: `id1`, `id2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("id{}", self.next)
    }
}

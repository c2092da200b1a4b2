// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Preset Genome Library
//!
//! An indexed, tagged set of genomes the host selects from at runtime.
//! The library owns every nested gene and weight vector; `initialise` on
//! an already populated library tears the previous contents down first so
//! repeated loads cannot leak slots, and `destroy` tolerates a
//! never-initialised or already-destroyed state.

use ahash::AHashMap;
use tracing::debug;

use crate::error::{GenomeError, Result};
use crate::types::NetworkGenome;

/// Indexed, tagged set of network genomes.
#[derive(Debug, Default)]
pub struct GenomeLibrary {
    genomes: Vec<NetworkGenome>,
    tag_index: AHashMap<String, usize>,
    initialised: bool,
}

impl GenomeLibrary {
    /// Create an empty, uninitialised library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `count` empty genome slots.
    ///
    /// Destroys any prior contents first, so reinitialising a populated
    /// library releases every nested allocation before the new slots are
    /// built.
    pub fn initialise(&mut self, count: usize) -> Result<()> {
        if self.initialised {
            self.destroy();
        }
        let mut genomes = Vec::new();
        genomes.try_reserve_exact(count)?;
        genomes.resize(count, NetworkGenome::default());
        self.genomes = genomes;
        self.initialised = true;
        debug!(count, "genome library initialised");
        Ok(())
    }

    /// Validate `genome` and store it at `index`, replacing the slot.
    ///
    /// The slot is untouched when validation fails.
    pub fn insert(&mut self, index: usize, genome: NetworkGenome) -> Result<()> {
        if !self.initialised {
            return Err(GenomeError::NotInitialised);
        }
        if index >= self.genomes.len() {
            return Err(GenomeError::IndexOutOfRange {
                index,
                len: self.genomes.len(),
            });
        }
        genome.validate()?;
        if let Some(tag) = &genome.tag {
            if let Some(&existing) = self.tag_index.get(tag) {
                if existing != index {
                    return Err(GenomeError::DuplicateTag(tag.clone()));
                }
            }
        }
        // The replaced slot's tag stops resolving before the new one lands.
        if let Some(old_tag) = self.genomes[index].tag.take() {
            self.tag_index.remove(&old_tag);
        }
        if let Some(tag) = &genome.tag {
            self.tag_index.insert(tag.clone(), index);
        }
        self.genomes[index] = genome;
        Ok(())
    }

    /// Genome at `index`.
    pub fn get(&self, index: usize) -> Result<&NetworkGenome> {
        if !self.initialised {
            return Err(GenomeError::NotInitialised);
        }
        self.genomes.get(index).ok_or(GenomeError::IndexOutOfRange {
            index,
            len: self.genomes.len(),
        })
    }

    /// Genome whose tag equals `tag`, if any.
    pub fn get_by_tag(&self, tag: &str) -> Option<&NetworkGenome> {
        self.tag_index.get(tag).and_then(|&index| self.genomes.get(index))
    }

    /// Number of allocated slots.
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// Iterate over every slot in index order.
    pub fn iter(&self) -> impl Iterator<Item = &NetworkGenome> {
        self.genomes.iter()
    }

    /// Release every slot and the tag index.
    ///
    /// Safe to call on a never-initialised or already-destroyed library.
    pub fn destroy(&mut self) {
        if self.initialised {
            debug!(slots = self.genomes.len(), "genome library destroyed");
        }
        self.genomes = Vec::new();
        self.tag_index.clear();
        self.initialised = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Section;
    use crate::types::NodeGene;

    fn tagged_genome(tag: &str) -> NetworkGenome {
        let mut genome = NetworkGenome::new(1, 1).unwrap().with_tag(tag);
        genome.input_nodes[0].weights = vec![0.5];
        genome.hidden_nodes[0].weights = vec![0.5, 0.5];
        genome
    }

    #[test]
    fn test_initialise_insert_lookup() {
        let mut library = GenomeLibrary::new();
        library.initialise(2).unwrap();
        library.insert(0, tagged_genome("slow")).unwrap();
        library.insert(1, tagged_genome("fast")).unwrap();

        assert_eq!(library.len(), 2);
        assert_eq!(library.get(1).unwrap().tag.as_deref(), Some("fast"));
        assert_eq!(library.get_by_tag("slow").unwrap().tag.as_deref(), Some("slow"));
        assert!(library.get_by_tag("missing").is_none());
    }

    #[test]
    fn test_insert_requires_initialise() {
        let mut library = GenomeLibrary::new();
        assert_eq!(
            library.insert(0, tagged_genome("x")),
            Err(GenomeError::NotInitialised)
        );
    }

    #[test]
    fn test_insert_rejects_out_of_range_slot() {
        let mut library = GenomeLibrary::new();
        library.initialise(1).unwrap();
        assert_eq!(
            library.insert(3, tagged_genome("x")),
            Err(GenomeError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_invalid_genome_leaves_slot_untouched() {
        let mut library = GenomeLibrary::new();
        library.initialise(1).unwrap();
        library.insert(0, tagged_genome("keep")).unwrap();

        let mut broken = tagged_genome("broken");
        broken.hidden_nodes.push(NodeGene::default());
        let err = library.insert(0, broken).unwrap_err();
        assert!(matches!(
            err,
            GenomeError::TopologyMismatch {
                section: Section::Hidden,
                ..
            }
        ));
        // Prior slot and its tag survive the failed load.
        assert_eq!(library.get(0).unwrap().tag.as_deref(), Some("keep"));
        assert!(library.get_by_tag("keep").is_some());
    }

    #[test]
    fn test_duplicate_tag_rejected_replacement_allowed() {
        let mut library = GenomeLibrary::new();
        library.initialise(2).unwrap();
        library.insert(0, tagged_genome("osc")).unwrap();
        assert_eq!(
            library.insert(1, tagged_genome("osc")),
            Err(GenomeError::DuplicateTag("osc".into()))
        );
        // Re-inserting at the same slot with the same tag is a replacement.
        library.insert(0, tagged_genome("osc")).unwrap();
        // Replacing the slot with a new tag releases the old one.
        library.insert(0, tagged_genome("osc2")).unwrap();
        assert!(library.get_by_tag("osc").is_none());
        library.insert(1, tagged_genome("osc")).unwrap();
    }

    #[test]
    fn test_reinitialise_destroys_prior_contents() {
        let mut library = GenomeLibrary::new();
        library.initialise(1).unwrap();
        library.insert(0, tagged_genome("old")).unwrap();
        library.initialise(3).unwrap();

        assert_eq!(library.len(), 3);
        // Old tags no longer resolve against the new slots.
        assert!(library.get_by_tag("old").is_none());
        assert!(library.get(0).unwrap().tag.is_none());
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut library = GenomeLibrary::new();
        // Never-initialised destroy is a no-op.
        library.destroy();
        library.initialise(2).unwrap();
        library.insert(0, tagged_genome("x")).unwrap();
        library.destroy();
        assert!(!library.is_initialised());
        assert_eq!(library.len(), 0);
        library.destroy();
        assert_eq!(library.len(), 0);
    }
}

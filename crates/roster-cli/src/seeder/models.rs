//! Configuration for seeding a fake school.

use roster_core::Modality;

/// Complete configuration for seeding a school.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    /// Classes are created with codes `1..=num_classes`.
    pub num_classes: u8,
    pub students_per_class: usize,
    pub capacity: u8,
    /// Every n-th class (by code) is remote; 0 keeps every class in person.
    pub remote_every: u8,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_classes: 3,
            students_per_class: 8,
            capacity: 10,
            remote_every: 0,
        }
    }
}

impl SeedConfig {
    /// Creates a new seed configuration with the specified number of classes.
    pub fn new(num_classes: u8) -> Self {
        Self {
            num_classes,
            ..Default::default()
        }
    }

    pub fn with_students_per_class(mut self, students: usize) -> Self {
        self.students_per_class = students;
        self
    }

    pub fn with_capacity(mut self, capacity: u8) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_remote_every(mut self, every: u8) -> Self {
        self.remote_every = every;
        self
    }

    pub fn modality_for(&self, code: u8) -> Modality {
        if self.remote_every > 0 && code % self.remote_every == 0 {
            Modality::Remote
        } else {
            Modality::InPerson
        }
    }

    /// Students that would be generated in total.
    pub fn total_students(&self) -> usize {
        self.num_classes as usize * self.students_per_class
    }
}

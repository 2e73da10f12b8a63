/// Positions and colours of one draw batch.
///
/// Both sequences always have the same length. Fields are built once and
/// never edited; animation rotates the owning entity instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
    colours: Vec<[f32; 3]>,
}

impl ParticleField {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count),
            colours: Vec::with_capacity(count),
        }
    }

    pub fn push(&mut self, position: [f32; 3], colour: [f32; 3]) {
        self.positions.push(position);
        self.colours.push(colour);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colours(&self) -> &[[f32; 3]] {
        &self.colours
    }

    /// Interleaved `x, y, z` buffer, three floats per particle.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flatten().copied().collect()
    }

    /// Interleaved `r, g, b` buffer, three floats per particle.
    pub fn flat_colours(&self) -> Vec<f32> {
        self.colours.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_buffers_parallel() {
        let mut field = ParticleField::with_capacity(2);
        assert!(field.is_empty());

        field.push([1.0, 2.0, 3.0], [0.1, 0.2, 0.3]);
        field.push([4.0, 5.0, 6.0], [0.4, 0.5, 0.6]);

        assert_eq!(field.len(), 2);
        assert_eq!(field.colours().len(), 2);
        assert_eq!(field.flat_positions(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(field.flat_colours().len() / 3, field.len());
    }
}

use num_traits::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Vector<T, N> {
  pub fn squared_magnitude(&self) -> T
  where
    T: Float,
  {
    self.0.iter().fold(T::zero(), |total, &elt| total + elt * elt)
  }
}

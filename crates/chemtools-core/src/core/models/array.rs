use crate::core::keys::{ArchiveKey, ElementType};
use ndarray::{Array, ArrayD, ArrayViewD, Dimension};

/// The numeric payload of one archive entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    Int(ArrayD<i64>),
    Float(ArrayD<f64>),
}

impl ArrayData {
    pub fn shape(&self) -> &[usize] {
        match self {
            ArrayData::Int(a) => a.shape(),
            ArrayData::Float(a) => a.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Length of the leading dimension, `None` for zero-dimensional arrays.
    pub fn leading_dim(&self) -> Option<usize> {
        self.shape().first().copied()
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            ArrayData::Int(_) => ElementType::Integer,
            ArrayData::Float(_) => ElementType::Float,
        }
    }

    /// The NumPy dtype name the payload is written as.
    pub fn dtype_name(&self) -> &'static str {
        match self {
            ArrayData::Int(_) => "int64",
            ArrayData::Float(_) => "float64",
        }
    }

    pub fn as_int(&self) -> Option<ArrayViewD<'_, i64>> {
        match self {
            ArrayData::Int(a) => Some(a.view()),
            ArrayData::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<ArrayViewD<'_, f64>> {
        match self {
            ArrayData::Float(a) => Some(a.view()),
            ArrayData::Int(_) => None,
        }
    }
}

impl<D: Dimension> From<Array<i64, D>> for ArrayData {
    fn from(array: Array<i64, D>) -> Self {
        ArrayData::Int(array.into_dyn())
    }
}

impl<D: Dimension> From<Array<f64, D>> for ArrayData {
    fn from(array: Array<f64, D>) -> Self {
        ArrayData::Float(array.into_dyn())
    }
}

/// One key-value entry of an archive record.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArray {
    key: ArchiveKey,
    data: ArrayData,
}

impl NamedArray {
    pub fn new(key: ArchiveKey, data: ArrayData) -> Self {
        Self { key, data }
    }

    pub fn key(&self) -> &ArchiveKey {
        &self.key
    }

    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    pub fn into_data(self) -> ArrayData {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array0, array};

    #[test]
    fn conversions_keep_shape_and_element_type() {
        let nums: ArrayData = array![6i64, 1, 1, 1, 1].into();
        assert_eq!(nums.shape(), &[5]);
        assert_eq!(nums.element_type(), ElementType::Integer);
        assert_eq!(nums.dtype_name(), "int64");
        assert!(nums.as_float().is_none());

        let coords: ArrayData = ndarray::Array2::<f64>::zeros((5, 3)).into();
        assert_eq!(coords.shape(), &[5, 3]);
        assert_eq!(coords.ndim(), 2);
        assert_eq!(coords.leading_dim(), Some(5));
        assert_eq!(coords.element_type(), ElementType::Float);
    }

    #[test]
    fn zero_dimensional_arrays_have_no_leading_dimension() {
        let scalar: ArrayData = Array0::from_elem((), 1.5f64).into();
        assert_eq!(scalar.ndim(), 0);
        assert_eq!(scalar.leading_dim(), None);
    }
}

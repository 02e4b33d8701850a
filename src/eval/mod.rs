/// Active-effect selection and overlap resolution.
pub mod select;

// Board geometry constants.

pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_HOUSES: usize = 27;

use crate::{arch::Params, dataset::Dataset};

pub trait LossFn {
    fn loss(&self, params: Params, dataset: &Dataset) -> f64;
    fn gradient(&self, params: Params, dataset: &Dataset) -> [f64; 2];
}

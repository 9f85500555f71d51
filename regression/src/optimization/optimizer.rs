pub trait Optimizer {
    fn update_params(&mut self, params: &mut [f64], grad: &[f64]);
}

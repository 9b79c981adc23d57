use onn::{BuildParams, OnnResult};

use crate::util::single_rates;

/// Re-sizes the same rates across a grid of tuning parameters.
pub fn sweep(rates: &[f64], t_step_params: &[f64], num_evals_params: &[f64]) -> OnnResult<()> {
    for t_step_param in t_step_params {
        for num_evals_param in num_evals_params {
            let params = BuildParams::new(*t_step_param, *num_evals_param);
            let network = single_rates(rates, &params)?;

            println!(
                "t_step_param {:<5} num_evals_param {:<5} -> t_step {:.6} num_steps {}",
                t_step_param,
                num_evals_param,
                network.step_size(),
                network.num_steps()
            );
        }
    }

    Ok(())
}

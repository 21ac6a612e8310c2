//! Lorentzian line-broadening.
//!
//! A resampled spectrum is a train of delta-like spikes on a uniform grid.
//! Physical peaks have finite width, so the spikes are convolved with a
//! Lorentzian profile sampled on the same grid spacing.

use std::f64::consts::PI;

use ndarray::Array1;

use crate::grid::build_grid;

/// Kernel half-extent, as a multiple of the requested width. Beyond this
/// the Lorentzian tail contributes negligibly to the convolution.
const KERNEL_PAD_WIDTHS: f64 = 20.0;

/// Lorentzian profile centred at `x0` with full width at half maximum
/// `fwhm`, normalised to unit area over the real line.
pub fn lorentzian(x: f64, x0: f64, fwhm: f64) -> f64 {
    let gamma = 0.5 * fwhm;
    gamma / (PI * ((x - x0) * (x - x0) + gamma * gamma))
}

/// Discrete convolution returning the central part of the full result,
/// with the same length as the longer input (numpy `mode='same'`).
pub fn convolve_same(signal: &Array1<f64>, kernel: &Array1<f64>) -> Array1<f64> {
    let n = signal.len();
    let m = kernel.len();
    if n == 0 || m == 0 {
        return Array1::zeros(n.max(m));
    }

    let out_len = n.max(m);
    let offset = (n.min(m) - 1) / 2;
    let mut out = Array1::zeros(out_len);
    for k in 0..out_len {
        let kk = k + offset;
        let i_lo = kk.saturating_sub(m - 1);
        let i_hi = kk.min(n - 1);
        let mut acc = 0.0;
        for i in i_lo..=i_hi {
            acc += signal[i] * kernel[kk - i];
        }
        out[k] = acc;
    }
    out
}

/// Convolve a resampled signal (grid spacing `d`) with a Lorentzian of the
/// given width (FWHM, in x-axis units).
///
/// The kernel is sampled over `[-20*width, 20*width)` at step `d`. The
/// output always has the same length as the input, so the grid alignment
/// invariant holds even when the kernel would be longer than the signal.
pub fn broaden(signal: &Array1<f64>, d: f64, width: f64) -> Array1<f64> {
    let pad = KERNEL_PAD_WIDTHS * width;
    let kernel = build_grid(-pad, pad, d).mapv(|x| lorentzian(x, 0.0, width));
    let out = convolve_same(signal, &kernel);

    if out.len() == signal.len() {
        return out;
    }
    // Kernel longer than the signal: keep the central part so the output
    // stays aligned with the grid.
    let start = (out.len() - signal.len()) / 2;
    out.slice(ndarray::s![start..start + signal.len()]).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lorentzian_peak_value() {
        // Maximum of a unit-area Lorentzian is 2/(pi*fwhm)
        let fwhm = 2.0;
        let peak = lorentzian(0.0, 0.0, fwhm);
        assert!((peak - 2.0 / (PI * fwhm)).abs() < 1e-15);
    }

    #[test]
    fn lorentzian_half_maximum_at_half_width() {
        let fwhm = 3.0;
        let peak = lorentzian(5.0, 5.0, fwhm);
        let at_half_width = lorentzian(5.0 + fwhm / 2.0, 5.0, fwhm);
        assert!((at_half_width - peak / 2.0).abs() < 1e-15);
    }

    #[test]
    fn lorentzian_is_symmetric() {
        for &x in &[0.1, 0.7, 2.5, 10.0] {
            let left = lorentzian(-x, 0.0, 1.5);
            let right = lorentzian(x, 0.0, 1.5);
            assert!((left - right).abs() < 1e-15);
        }
    }

    #[test]
    fn convolve_with_unit_kernel_is_identity() {
        let signal = Array1::from_vec(vec![1.0, 0.0, 3.0, 2.0, 0.5]);
        let kernel = Array1::from_vec(vec![1.0]);
        let out = convolve_same(&signal, &kernel);
        assert_eq!(out.to_vec(), signal.to_vec());
    }

    #[test]
    fn convolve_matches_numpy_same_mode() {
        // np.convolve([1,2,3,4], [0.25,0.5,0.25], mode='same')
        let signal = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let kernel = Array1::from_vec(vec![0.25, 0.5, 0.25]);
        let out = convolve_same(&signal, &kernel);
        let expected = [1.0, 2.0, 3.0, 2.75];
        assert_eq!(out.len(), expected.len());
        for (o, e) in out.iter().zip(expected.iter()) {
            assert!((o - e).abs() < 1e-12, "{o} != {e}");
        }
    }

    #[test]
    fn broadened_length_matches_signal() {
        let signal = Array1::from_vec(vec![0.0; 500]);
        let out = broaden(&signal, 0.1, 2.0);
        assert_eq!(out.len(), signal.len());
    }

    #[test]
    fn broadened_length_matches_even_for_short_signals() {
        // Kernel (800 points at d=0.1, width=2) far exceeds the signal
        let mut values = vec![0.0; 50];
        values[25] = 1.0;
        let signal = Array1::from_vec(values);
        let out = broaden(&signal, 0.1, 2.0);
        assert_eq!(out.len(), signal.len());
    }

    #[test]
    fn single_spike_broadens_to_lorentzian_shape() {
        let d = 0.01;
        let width = 0.2;
        let n = 2001;
        let mut values = vec![0.0; n];
        values[n / 2] = 1.0;
        let signal = Array1::from_vec(values);

        let out = broaden(&signal, d, width);
        assert_eq!(out.len(), n);

        // The kernel grid spans [-pad, pad) so it has an even number of
        // points and the convolution centre lands one sample past the spike.
        let peak_idx = out
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap()
            .0;
        assert_eq!(peak_idx, n / 2 + 1);

        // Peak height follows the kernel's peak value
        assert!((out[peak_idx] - 2.0 / (PI * width)).abs() < 1e-6);

        // Symmetric around the peak
        for off in 1..200 {
            let l = out[peak_idx - off];
            let r = out[peak_idx + off];
            assert!((l - r).abs() < 1e-9);
        }
    }
}

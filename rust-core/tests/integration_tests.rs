//! Integration tests: WAV files on disk through load and transform

use std::path::PathBuf;
use std::f64::consts::PI;
use wave_spectrum::{load, transform, DecodeError, Direction, TimeWindow};
use wave_spectrum::waveform::{load_waveform, read_header};

/// Write a 16-bit WAV under the system temp dir and return its path
fn write_wav(name: &str, channels: u16, bits_per_sample: u16, sample_rate: u32, interleaved: &[i32]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wave_spectrum_{}_{}.wav", std::process::id(), name));
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for &sample in interleaved {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();

    path
}

fn stereo_tone(frames: usize, sample_rate: u32, freq_hz: f64) -> Vec<i32> {
    (0..frames)
        .flat_map(|n| {
            let t = n as f64 / sample_rate as f64;
            let left = (8000.0 * (2.0 * PI * freq_hz * t).sin()) as i32;
            let right = (n % 50) as i32 - 25;
            [left, right]
        })
        .collect()
}

#[test]
fn test_load_shape_matches_header() {
    let path = write_wav("shape", 2, 16, 8000, &stereo_tone(1000, 8000, 250.0));

    let header = read_header(&path).unwrap();
    let (samples, axis) = load(&path).unwrap();

    assert_eq!(header.channel_count, 2);
    assert_eq!(header.frame_count, 1000);
    assert_eq!(samples.channel_count(), 2);
    assert_eq!(samples.frame_count(), 1000);
    assert_eq!(axis.len(), 1000);
    assert_eq!(axis.first(), Some(0.0));
    assert_eq!(axis.last(), Some(999.0 * (1.0 / 8000.0)));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_tone_peaks_at_its_frequency() {
    let sample_rate = 8000;
    let path = write_wav("tone", 2, 16, sample_rate, &stereo_tone(800, sample_rate, 500.0));
    let (samples, axis) = load(&path).unwrap();

    let (spectrum, times) = transform(&samples, &axis, TimeWindow::Full, Direction::Forward).unwrap();
    let freqs = spectrum.frequencies(times.sample_period().unwrap());

    let left = spectrum.channel(0).unwrap();
    let half = spectrum.len() / 2;
    let (peak_bin, _) = left
        .iter()
        .take(half)
        .enumerate()
        .max_by(|(_, a), (_, b)| a.norm().partial_cmp(&b.norm()).unwrap())
        .unwrap();

    assert!((freqs[peak_bin] - 500.0).abs() < 10.0);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_window_round_trip_on_loaded_file() {
    let path = write_wav("round_trip", 2, 16, 1000, &stereo_tone(200, 1000, 40.0));
    let waveform = load_waveform(&path).unwrap();

    let window = TimeWindow::bounded(0.0495, 0.1505);
    let (spectrum, times) =
        transform(&waveform.samples, &waveform.time_axis, window, Direction::Forward).unwrap();
    assert_eq!(times.len(), 101);
    assert_eq!(times.first(), waveform.time_axis.get(50));

    let (restored, _) = transform(&spectrum, &times, TimeWindow::Full, Direction::Inverse).unwrap();

    for channel in 0..2 {
        let original = waveform.samples.channel(channel).unwrap();
        let recovered = restored.channel(channel).unwrap();
        for (i, value) in recovered.iter().enumerate() {
            assert!((value.re - original[50 + i] as f64).abs() < 1e-6);
            assert!(value.im.abs() < 1e-6);
        }
    }

    std::fs::remove_file(path).ok();
}

#[test]
fn test_other_sample_widths_fail_to_load() {
    let eight = write_wav("eight_bit", 1, 8, 8000, &[1, 2, 3, 4]);
    let twenty_four = write_wav("twenty_four_bit", 1, 24, 8000, &[1, 2, 3, 4]);

    assert!(matches!(load(&eight), Err(DecodeError::UnsupportedSampleWidth { bits: 8 })));
    assert!(matches!(load(&twenty_four), Err(DecodeError::UnsupportedSampleWidth { bits: 24 })));

    std::fs::remove_file(eight).ok();
    std::fs::remove_file(twenty_four).ok();
}

#[test]
fn test_truncated_file_fails_to_load() {
    let path = write_wav("truncated", 1, 16, 8000, &(0..100).collect::<Vec<i32>>());

    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 20]).unwrap();

    assert!(matches!(load(&path), Err(DecodeError::Truncated { expected: 200, available: 180 })));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_fails_to_load() {
    let path = std::env::temp_dir().join("wave_spectrum_this_file_does_not_exist.wav");
    assert!(matches!(load(&path), Err(DecodeError::Open { .. })));
}

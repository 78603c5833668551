//! Music engine: one looping background track via rodio.
//!
//! The track is generated as an in-memory WAV buffer at init time and looped
//! on a single sink. Build without the "sound" feature (or with
//! `--no-default-features`) and the stub engine does nothing.

#[cfg(feature = "sound")]
mod inner {
    use std::io::Cursor;

    use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

    const SAMPLE_RATE: u32 = 22050;

    pub struct MusicEngine {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        track: Vec<u8>,
        sink: Option<Sink>,
    }

    impl MusicEngine {
        pub fn new() -> Option<Self> {
            let (stream, handle) = OutputStream::try_default().ok()?;
            Some(Self {
                _stream: stream,
                handle,
                track: make_wav(&gen_track()),
                sink: None,
            })
        }

        /// Start the loop from the beginning, replacing any running playback.
        pub fn play(&mut self) {
            self.stop();
            if let Ok(sink) = Sink::try_new(&self.handle) {
                let cursor = Cursor::new(self.track.clone());
                if let Ok(src) = rodio::Decoder::new(cursor) {
                    sink.append(src.repeat_infinite());
                    self.sink = Some(sink);
                }
            }
        }

        pub fn stop(&mut self) {
            if let Some(sink) = self.sink.take() {
                sink.stop();
            }
        }

        /// Restart from the top of the track.
        pub fn rewind(&mut self) {
            self.play();
        }
    }

    /// Four-bar minor arpeggio loop, square-ish for the retro feel.
    fn gen_track() -> Vec<f32> {
        let notes = [220.0_f32, 261.63, 329.63, 261.63, 220.0, 174.61, 220.0, 261.63];
        let note_dur = 0.28;
        let mut samples = Vec::new();
        for &freq in &notes {
            let n = (SAMPLE_RATE as f32 * note_dur) as usize;
            for i in 0..n {
                let t = i as f32 / SAMPLE_RATE as f32;
                let env = 1.0 - (i as f32 / n as f32).powf(2.0);
                let wave = (t * freq * 2.0 * std::f32::consts::PI).sin() * 0.7
                    + (t * freq * 3.0 * 2.0 * std::f32::consts::PI).sin() * 0.2;
                samples.push(wave * env * 0.18);
            }
        }
        samples
    }

    /// Wrap mono f32 samples in a 16-bit PCM WAV container.
    fn make_wav(samples: &[f32]) -> Vec<u8> {
        let data_len = (samples.len() * 2) as u32;
        let mut out = Vec::with_capacity(44 + data_len as usize);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVEfmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
        out.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for &s in samples {
            let v = (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            out.extend_from_slice(&v.to_le_bytes());
        }
        out
    }
}

#[cfg(not(feature = "sound"))]
mod inner {
    /// No-op engine when audio is compiled out.
    pub struct MusicEngine;

    impl MusicEngine {
        pub fn new() -> Option<Self> {
            Some(Self)
        }
        pub fn play(&mut self) {}
        pub fn stop(&mut self) {}
        pub fn rewind(&mut self) {}
    }
}

pub use inner::MusicEngine;

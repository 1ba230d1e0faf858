use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

/// The single shared sound resource: a 440 Hz square wave that the driver
/// starts and stops from the engine's sound-timer state each frame.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio = sdl.audio()?;
        let spec = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio.open_playback(None, &spec, |spec| SquareWave {
            phase_inc: 440.0 / spec.freq as f32,
            phase: 0.0,
            volume: 0.2,
        })?;
        Ok(Beeper { device })
    }

    /// Resumes or pauses the tone; both are idempotent in SDL2.
    pub fn set_active(&self, active: bool) {
        if active {
            self.device.resume();
        } else {
            self.device.pause();
        }
    }
}

struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

use log::warn;
use tetra::audio::{Sound, SoundInstance};
use tetra::graphics::text::Font;
use tetra::Context;

const FONT_PATH: &str = "assets/fonts/ShareTechMono-Regular.ttf";

const MUSIC_PATH: &str = "assets/music/feast-from-the-east.mp3";
const BEEP_PATH: &str = "assets/sounds/beep.wav";
const EAT_PATH: &str = "assets/sounds/beep-2.wav";
const BOOM_PATH: &str = "assets/sounds/boom.wav";

const MUSIC_VOLUME: f32 = 0.1;

/// The one font family at the handful of sizes the scenes use.
pub struct Fonts {
    /// Score label and prompts.
    pub body: Font,
    /// Menu options.
    pub menu: Font,
    /// "GAME OVER" / "GAME PAUSED" banners.
    pub heading: Font,
    /// Start screen title.
    pub title: Font,
}

impl Fonts {
    pub fn load(ctx: &mut Context) -> tetra::Result<Fonts> {
        Ok(Fonts {
            body: Font::vector(ctx, FONT_PATH, 16.0)?,
            menu: Font::vector(ctx, FONT_PATH, 24.0)?,
            heading: Font::vector(ctx, FONT_PATH, 32.0)?,
            title: Font::vector(ctx, FONT_PATH, 64.0)?,
        })
    }
}

/// Background music and the three effect sounds.
///
/// A sound that fails to load is logged and left out; every playback hook
/// then degrades to a no-op, the game itself is unaffected.
pub struct AudioBank {
    music: Option<Sound>,
    music_instance: Option<SoundInstance>,
    menu_beep: Option<Sound>,
    eat_beep: Option<Sound>,
    crash_boom: Option<Sound>,
}

impl AudioBank {
    pub fn load() -> AudioBank {
        AudioBank {
            music: load_sound(MUSIC_PATH),
            music_instance: None,
            menu_beep: load_sound(BEEP_PATH),
            eat_beep: load_sound(EAT_PATH),
            crash_boom: load_sound(BOOM_PATH),
        }
    }

    /// Starts the background music on repeat at low volume. Restarting while
    /// already playing replaces the old instance.
    pub fn play_music(&mut self, ctx: &mut Context) {
        self.stop_music();

        if let Some(music) = &self.music {
            match music.play_with(ctx, MUSIC_VOLUME, 1.0) {
                Ok(mut instance) => {
                    instance.set_repeating(true);
                    self.music_instance = Some(instance);
                }
                Err(err) => warn!("failed to play music: {}", err),
            }
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(instance) = self.music_instance.take() {
            instance.stop();
        }
    }

    pub fn play_menu_beep(&self, ctx: &mut Context) {
        play_effect(ctx, &self.menu_beep, "menu beep");
    }

    pub fn play_eat_beep(&self, ctx: &mut Context) {
        play_effect(ctx, &self.eat_beep, "eat beep");
    }

    pub fn play_crash_boom(&self, ctx: &mut Context) {
        play_effect(ctx, &self.crash_boom, "crash boom");
    }
}

fn load_sound(path: &str) -> Option<Sound> {
    match Sound::new(path) {
        Ok(sound) => Some(sound),
        Err(err) => {
            warn!("failed to load sound {}: {}", path, err);
            None
        }
    }
}

fn play_effect(ctx: &mut Context, sound: &Option<Sound>, label: &str) {
    if let Some(sound) = sound {
        if let Err(err) = sound.play(ctx) {
            warn!("failed to play {}: {}", label, err);
        }
    }
}

/// Everything the scenes share: font handles and the audio bank. Passed into
/// every scene call the way the scene stack owns its resource bundle.
pub struct Assets {
    pub fonts: Fonts,
    pub audio: AudioBank,
}

impl Assets {
    pub fn load(ctx: &mut Context) -> tetra::Result<Assets> {
        Ok(Assets {
            fonts: Fonts::load(ctx)?,
            audio: AudioBank::load(),
        })
    }
}

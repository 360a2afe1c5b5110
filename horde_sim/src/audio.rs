//! Path: horde_sim/src/audio.rs
//! Summary: BGM・SE 管理（rodio）+ コマンド駆動オーディオスレッド
//!
//! 音声データは埋め込まず、ホストが [SoundBank] 実装で供給する。
//! アセット欠落や出力デバイス不在は警告ログを出してスキップする
//! （フレームループを止めない）。

use crate::world::FrameEvent;
use horde_core::weapon::WeaponKind;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use rustc_hash::FxHashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// 再生キューに乗る効果音の識別子
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SoundId {
    PistolShot,
    ShotgunShot,
    RifleShot,
    RocketShot,
    MinigunShot,
    Reload,
    EmptyClick,
    EnemyHit,
    EnemyDeath,
    PlayerHit,
    Explosion,
    WaveComplete,
    WeaponUnlock,
    GameOver,
    Bgm,
}

/// 武器ごとの発射音
pub fn shot_sound(kind: WeaponKind) -> SoundId {
    match kind {
        WeaponKind::Pistol => SoundId::PistolShot,
        WeaponKind::Shotgun => SoundId::ShotgunShot,
        WeaponKind::AssaultRifle => SoundId::RifleShot,
        WeaponKind::RocketLauncher => SoundId::RocketShot,
        WeaponKind::Minigun => SoundId::MinigunShot,
    }
}

/// 音声データの供給元。None を返したアセットはスキップされる。
pub trait SoundBank: Send + 'static {
    fn load(&self, id: SoundId) -> Option<Vec<u8>>;
}

/// Audio スレッドに送るコマンド。
///
/// World を直接更新せず、音再生要求だけをキューで渡すための境界。
#[derive(Debug, Clone)]
pub enum AudioCommand {
    PlayBgm,
    PauseBgm,
    ResumeBgm,
    SetBgmVolume(f32),
    /// 多重再生を許す SE（フルオート武器の発射音など）
    PlaySe(SoundId),
    /// 同時に 1 インスタンスのみの SE。再生中なら止めて鳴らし直す。
    PlaySeExclusive(SoundId),
    Shutdown,
}

/// Audio コマンド送信ハンドル（クローン可能）。
#[derive(Clone)]
pub struct AudioCommandSender {
    tx: Sender<AudioCommand>,
}

impl AudioCommandSender {
    fn send(&self, command: AudioCommand) {
        let _ = self.tx.send(command);
    }

    pub fn play_bgm(&self) {
        self.send(AudioCommand::PlayBgm);
    }

    pub fn pause_bgm(&self) {
        self.send(AudioCommand::PauseBgm);
    }

    pub fn resume_bgm(&self) {
        self.send(AudioCommand::ResumeBgm);
    }

    pub fn set_bgm_volume(&self, volume: f32) {
        self.send(AudioCommand::SetBgmVolume(volume));
    }

    pub fn play_se(&self, id: SoundId) {
        self.send(AudioCommand::PlaySe(id));
    }

    pub fn play_se_exclusive(&self, id: SoundId) {
        self.send(AudioCommand::PlaySeExclusive(id));
    }

    pub fn shutdown(&self) {
        self.send(AudioCommand::Shutdown);
    }
}

/// フレームイベントを音声コマンドに写す。
/// 発射音はフルオート武器のみ多重再生を許し、単発武器は 1 インスタンス。
pub fn dispatch_frame_audio(events: &[FrameEvent], tx: &AudioCommandSender) {
    for ev in events {
        match *ev {
            FrameEvent::ShotFired { weapon } => {
                if weapon.is_automatic() {
                    tx.play_se(shot_sound(weapon));
                } else {
                    tx.play_se_exclusive(shot_sound(weapon));
                }
            }
            // クリック音のレート制限は武器状態側で済んでいる
            FrameEvent::MagazineEmpty { .. } => tx.play_se(SoundId::EmptyClick),
            FrameEvent::ReloadStarted { .. } => tx.play_se(SoundId::Reload),
            FrameEvent::EnemyHit { .. } => tx.play_se(SoundId::EnemyHit),
            FrameEvent::EnemyKilled { .. } => tx.play_se(SoundId::EnemyDeath),
            FrameEvent::PlayerDamaged { .. } => tx.play_se(SoundId::PlayerHit),
            FrameEvent::RocketExploded { .. } | FrameEvent::ZombieExploded { .. } => {
                tx.play_se(SoundId::Explosion)
            }
            FrameEvent::WaveCompleted { .. } => tx.play_se(SoundId::WaveComplete),
            FrameEvent::WeaponUnlocked { .. } => tx.play_se(SoundId::WeaponUnlock),
            FrameEvent::GameOver { .. } => {
                tx.pause_bgm();
                tx.play_se(SoundId::GameOver);
            }
            FrameEvent::WaveStarted { .. }
            | FrameEvent::EnemySpawned { .. }
            | FrameEvent::ReloadFinished { .. }
            | FrameEvent::WeaponSwitched { .. }
            | FrameEvent::BossAttackWarning { .. }
            | FrameEvent::BossShockwave { .. } => {}
        }
    }
}

struct AudioManager {
    _stream:   OutputStream,
    bgm_sink:  Sink,
    /// 単発武器用: SoundId ごとに 1 本の排他 Sink
    exclusive: FxHashMap<SoundId, Sink>,
}

impl AudioManager {
    fn new() -> Option<Self> {
        let stream = OutputStreamBuilder::open_default_stream().ok()?;
        let bgm_sink = Sink::connect_new(&stream.mixer());
        Some(Self {
            _stream: stream,
            bgm_sink,
            exclusive: FxHashMap::default(),
        })
    }

    fn play_bgm(&self, bytes: Vec<u8>) {
        if !self.bgm_sink.empty() {
            return;
        }
        let cursor = std::io::Cursor::new(bytes);
        if let Ok(source) = Decoder::new(cursor) {
            self.bgm_sink.append(source.buffered().repeat_infinite());
        }
    }

    fn play_se(&self, bytes: Vec<u8>) {
        let cursor = std::io::Cursor::new(bytes);
        if let Ok(source) = Decoder::new(cursor) {
            let sink = Sink::connect_new(&self._stream.mixer());
            sink.append(source);
            sink.detach();
        }
    }

    fn play_se_exclusive(&mut self, id: SoundId, bytes: Vec<u8>) {
        let cursor = std::io::Cursor::new(bytes);
        if let Ok(source) = Decoder::new(cursor) {
            // 既存のインスタンスは止めて置き換える
            if let Some(old) = self.exclusive.remove(&id) {
                old.stop();
            }
            let sink = Sink::connect_new(&self._stream.mixer());
            sink.append(source);
            self.exclusive.insert(id, sink);
        }
    }
}

/// Audio ワーカーを起動し、コマンド送信ハンドルを返す。
///
/// 失敗時でもハンドルは返す（送信は無視される）。呼び出し側を止めない設計。
pub fn start_audio_thread<B: SoundBank>(bank: B) -> AudioCommandSender {
    let (tx, rx) = mpsc::channel::<AudioCommand>();
    let thread_tx = tx.clone();
    let _ = thread::Builder::new()
        .name("audio-thread".to_string())
        .spawn(move || run_audio_loop(rx, bank));
    AudioCommandSender { tx: thread_tx }
}

fn run_audio_loop<B: SoundBank>(rx: Receiver<AudioCommand>, bank: B) {
    let mut audio = AudioManager::new();
    if audio.is_none() {
        log::warn!("Audio output device is unavailable; audio commands will be dropped");
    }

    let load = |id: SoundId| -> Option<Vec<u8>> {
        let bytes = bank.load(id);
        if bytes.is_none() {
            log::warn!("Sound asset missing: {:?}; cue skipped", id);
        }
        bytes
    };

    while let Ok(command) = rx.recv() {
        match command {
            AudioCommand::PlayBgm => {
                if let (Some(audio), Some(bytes)) = (&audio, load(SoundId::Bgm)) {
                    audio.play_bgm(bytes);
                }
            }
            AudioCommand::PauseBgm => {
                if let Some(audio) = &audio {
                    audio.bgm_sink.pause();
                }
            }
            AudioCommand::ResumeBgm => {
                if let Some(audio) = &audio {
                    audio.bgm_sink.play();
                }
            }
            AudioCommand::SetBgmVolume(volume) => {
                if let Some(audio) = &audio {
                    audio.bgm_sink.set_volume(volume.clamp(0.0, 1.0));
                }
            }
            AudioCommand::PlaySe(id) => {
                if let (Some(audio), Some(bytes)) = (&audio, load(id)) {
                    audio.play_se(bytes);
                }
            }
            AudioCommand::PlaySeExclusive(id) => {
                if let Some(bytes) = load(id) {
                    if let Some(audio) = audio.as_mut() {
                        audio.play_se_exclusive(id, bytes);
                    }
                }
            }
            AudioCommand::Shutdown => break,
        }
    }
}

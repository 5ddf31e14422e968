use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::{
    buffer::PixelBuffer,
    config::Config,
    effects::{ColorAdjust, Effect, Sharpen, Vignette},
    engine::{ProgressSink, Stage, StageStatus, VarianceSource},
    error::{Result, StyleForgeError},
    styles::{PresetRegistry, StylePreset},
};

/// Applies style presets to pixel buffers
///
/// The engine runs a fixed pipeline per request:
/// 1. Decode - validate the request
/// 2. Draw - build the effect passes for the preset and variance
/// 3. Color adjust - grade every pixel
/// 4. Finish - composite the vignette, then sharpen
///
/// The engine holds no per-request state, so one engine can serve concurrent
/// requests; each request owns its buffer from start to finish.
pub struct StyleEngine {
    registry: PresetRegistry,
    variance: VarianceSource,
    pool: ThreadPool,
}

impl StyleEngine {
    /// Create an engine from configuration
    ///
    /// Custom presets from the configuration are merged over the built-ins.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let registry = PresetRegistry::new().with_custom(&config.presets)?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.engine.processing_threads)
            .thread_name(|i| format!("styleforge-worker-{}", i))
            .build()
            .map_err(|e| StyleForgeError::generic(format!("Failed to start worker pool: {}", e)))?;

        debug!(
            "Engine ready: {} presets, {} worker threads, variance {:?}",
            registry.len(),
            config.engine.processing_threads,
            config.engine.variance
        );

        Ok(Self {
            registry,
            variance: config.engine.variance,
            pool,
        })
    }

    /// Replace the variance source used by [`transform`](Self::transform)
    pub fn with_variance(mut self, variance: VarianceSource) -> Self {
        self.variance = variance;
        self
    }

    /// Presets this engine knows about
    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    /// Transform a buffer, drawing the run's variance from the configured source
    pub fn transform(
        &self,
        buffer: PixelBuffer,
        preset: &StylePreset,
        progress: Option<&dyn ProgressSink>,
    ) -> Result<PixelBuffer> {
        let variance = self.variance.resolve();
        self.transform_with_variance(buffer, preset, variance, progress)
    }

    /// Transform a buffer using the preset registered under `key`
    pub fn transform_by_key(
        &self,
        buffer: PixelBuffer,
        key: &str,
        progress: Option<&dyn ProgressSink>,
    ) -> Result<PixelBuffer> {
        let preset = self.registry.get(key)?;
        self.transform(buffer, preset, progress)
    }

    /// Transform raw RGBA bytes using the preset registered under `key`
    ///
    /// The preset is resolved before the bytes are inspected, so an unknown key
    /// fails without touching the data.
    pub fn transform_raw(
        &self,
        width: u32,
        height: u32,
        data: Vec<u8>,
        key: &str,
        progress: Option<&dyn ProgressSink>,
    ) -> Result<PixelBuffer> {
        let preset = self.registry.get(key)?;
        let buffer = PixelBuffer::from_raw(width, height, data)?;
        self.transform(buffer, preset, progress)
    }

    /// Transform a buffer with an explicit variance
    ///
    /// With the same input, preset and variance the output is always identical.
    pub fn transform_with_variance(
        &self,
        buffer: PixelBuffer,
        preset: &StylePreset,
        variance: f64,
        progress: Option<&dyn ProgressSink>,
    ) -> Result<PixelBuffer> {
        let started = Instant::now();
        info!(
            "Applying '{}' style to {}x{} image (variance {:.3})",
            preset.name,
            buffer.width(),
            buffer.height(),
            variance
        );

        // Step 1: Decode
        notify(progress, Stage::Decode, StageStatus::Active);
        preset.validate(&preset.name)?;
        notify(progress, Stage::Decode, StageStatus::Done);

        // Step 2: Draw
        notify(progress, Stage::Draw, StageStatus::Active);
        let mut buffer = buffer;
        let color = ColorAdjust::from_preset(preset, variance);
        let finishing: [Box<dyn Effect>; 2] = [
            Box::new(Vignette::from_preset(preset)),
            Box::new(Sharpen::from_preset(preset)),
        ];
        notify(progress, Stage::Draw, StageStatus::Done);

        // Step 3: Color adjustment
        notify(progress, Stage::ColorAdjust, StageStatus::Active);
        self.run_effect(&color, &mut buffer)?;
        notify(progress, Stage::ColorAdjust, StageStatus::Done);

        // Step 4: Vignette, then sharpen on the vignetted result
        notify(progress, Stage::Finish, StageStatus::Active);
        for effect in finishing.iter() {
            if effect.is_noop() {
                debug!("Skipping {}", effect.name());
                continue;
            }
            self.run_effect(effect.as_ref(), &mut buffer)?;
        }
        notify(progress, Stage::Finish, StageStatus::Done);

        info!("Style '{}' applied in {:.1?}", preset.name, started.elapsed());
        Ok(buffer)
    }

    fn run_effect(&self, effect: &dyn Effect, buffer: &mut PixelBuffer) -> Result<()> {
        let started = Instant::now();
        self.pool.install(|| effect.apply(buffer))?;
        debug!(
            "{} pass ({}) took {:.1?}",
            effect.name(),
            effect.description(),
            started.elapsed()
        );
        Ok(())
    }
}

fn notify(progress: Option<&dyn ProgressSink>, stage: Stage, status: StageStatus) {
    if let Some(sink) = progress {
        sink.report(stage, status);
    }
}

//! High-level motion task for the hexapod.
//!
//! Receives motion commands from other tasks and runs them through the gait engine. The task
//! is the only owner of the engine, so steps never overlap and the tripod alternation is
//! advanced exactly once per executed step.
use crate::kinematics::gait_engine::GaitEngine;
use crate::robot::{actuator::LegActuator, commands::MotionCommand};
use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Receiver};
use embedded_hal::delay::DelayNs;
use log::{error, info, warn};

/// Execute every command currently queued, in order, without waiting for more. Returns how
/// many commands ran. An actuator error stops the drain and leaves the rest queued.
pub fn drain_commands<M, A, D, const N: usize>(
    gait: &mut GaitEngine<A, D>,
    receiver: &Receiver<'_, M, MotionCommand, N>,
) -> Result<usize, A::Error>
where
    M: RawMutex,
    A: LegActuator,
    D: DelayNs,
{
    let mut executed = 0;
    while let Ok(cmd) = receiver.try_receive() {
        announce(gait, cmd);
        gait.execute(cmd)?;
        executed += 1;
    }
    Ok(executed)
}

/// Async loop for embassy executors. Phase holds await an embassy timer, so the executor
/// stays free between moves. Only returns when the actuator fails.
pub async fn motion_task<M, A, D, const N: usize>(
    mut gait: GaitEngine<A, D>,
    receiver: Receiver<'_, M, MotionCommand, N>,
) -> A::Error
where
    M: RawMutex,
    A: LegActuator,
    D: DelayNs,
{
    loop {
        let cmd = receiver.receive().await;
        announce(&gait, cmd);
        if let Err(e) = gait.execute_async(cmd).await {
            error!("[MOTION_TASK] actuator failure: {e:?}");
            return e;
        }
    }
}

fn announce<A, D>(gait: &GaitEngine<A, D>, cmd: MotionCommand)
where
    A: LegActuator,
    D: DelayNs,
{
    let stamp = "[MOTION_TASK] received";
    match cmd {
        MotionCommand::Stand => info!("{stamp} stand"),
        MotionCommand::Step(command) if gait.is_still(command) => {
            warn!("{stamp} step below cutoff, ignored: {command:?}")
        }
        MotionCommand::Step(command) => info!("{stamp} step {command:?}"),
        MotionCommand::Walk { command, steps } => info!("{stamp} walk {steps} x {command:?}"),
    }
}

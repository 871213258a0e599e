//! Named texture task queue.
//!
//! Textures are requested up front and resolved asynchronously by the asset server.
//! Each task settles exactly once (`Loaded` or `Failed`); consumers react to
//! [`TextureLoaded`] instead of assuming the image is ready when they build materials.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::core::config::BallPitConfig;
use crate::core::system::system_order::PrePhysicsSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct TextureTask {
    pub name: String,
    pub path: String,
    pub handle: Handle<Image>,
    pub state: TaskState,
}

#[derive(Resource, Debug, Default)]
pub struct TextureTasks {
    tasks: Vec<TextureTask>,
    settled_logged: bool,
}

impl TextureTasks {
    pub fn push(&mut self, name: impl Into<String>, path: impl Into<String>, handle: Handle<Image>) {
        self.tasks.push(TextureTask {
            name: name.into(),
            path: path.into(),
            handle,
            state: TaskState::Pending,
        });
        self.settled_logged = false;
    }

    /// Moves a pending task to its final state. Returns false if the task was unknown or already settled.
    pub fn resolve(&mut self, name: &str, state: TaskState) -> bool {
        match self.tasks.iter_mut().find(|t| t.name == name) {
            Some(task) if task.state == TaskState::Pending && state != TaskState::Pending => {
                task.state = state;
                true
            }
            _ => false,
        }
    }

    pub fn all_settled(&self) -> bool {
        self.tasks.iter().all(|t| t.state != TaskState::Pending)
    }

    pub fn count(&self, state: TaskState) -> usize {
        self.tasks.iter().filter(|t| t.state == state).count()
    }
}

/// Completion callback of a texture task.
#[derive(Event, Debug, Clone)]
pub struct TextureLoaded {
    pub name: String,
    pub handle: Handle<Image>,
}

/// Maps an asset server load state onto a task outcome (`None` while still in flight).
pub fn task_outcome(state: Option<&LoadState>) -> Option<TaskState> {
    match state {
        Some(LoadState::Loaded) => Some(TaskState::Loaded),
        Some(LoadState::Failed(_)) => Some(TaskState::Failed),
        _ => None,
    }
}

pub struct TextureTasksPlugin;

impl Plugin for TextureTasksPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextureTasks>()
            .add_event::<TextureLoaded>()
            .add_systems(Startup, queue_texture_tasks)
            .add_systems(Update, poll_texture_tasks.in_set(PrePhysicsSet));
    }
}

fn queue_texture_tasks(
    cfg: Res<BallPitConfig>,
    asset_server: Res<AssetServer>,
    mut tasks: ResMut<TextureTasks>,
) {
    for entry in &cfg.scene.textures {
        let handle: Handle<Image> = asset_server.load(entry.path.clone());
        tasks.push(entry.name.clone(), entry.path.clone(), handle);
        debug!(target: "assets", "queued texture task '{}' ({})", entry.name, entry.path);
    }
}

fn poll_texture_tasks(
    asset_server: Res<AssetServer>,
    mut tasks: ResMut<TextureTasks>,
    mut loaded: EventWriter<TextureLoaded>,
) {
    if tasks.settled_logged {
        return;
    }
    let mut outcomes = Vec::new();
    for task in tasks.tasks.iter().filter(|t| t.state == TaskState::Pending) {
        let state = asset_server.get_load_state(task.handle.id());
        if let Some(outcome) = task_outcome(state.as_ref()) {
            if let Some(LoadState::Failed(err)) = &state {
                warn!(target: "assets", "texture task '{}' ({}) failed: {err}", task.name, task.path);
            }
            outcomes.push((task.name.clone(), task.handle.clone(), outcome));
        }
    }
    for (name, handle, outcome) in outcomes {
        if tasks.resolve(&name, outcome) && outcome == TaskState::Loaded {
            info!(target: "assets", "load task finished: {name}");
            loaded.write(TextureLoaded { name, handle });
        }
    }
    if tasks.all_settled() {
        tasks.settled_logged = true;
        info!(
            target: "assets",
            "asset tasks: load finished ({} loaded, {} failed)",
            tasks.count(TaskState::Loaded),
            tasks.count(TaskState::Failed)
        );
    }
}

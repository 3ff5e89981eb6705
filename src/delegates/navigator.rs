use crate::navigation::{CommandQueue, ComponentId, NavigationCommand, OptionsPatch, ScreenOptions};
use crate::screens::Screen;

/// Navigation capabilities of a single screen.
pub trait NavigatorDelegate {
    /// Remove the screen from the stack.
    fn dismiss_screen(&self);
    /// Merge `patch` into the screen's live options.
    fn merge_options(&self, patch: OptionsPatch);
    /// Push `screen` above everything else.
    fn show_overlay(&self, screen: Box<dyn Screen>, options: ScreenOptions);
}

/// Navigator bound to one component id, writing to the host's command queue.
#[derive(Debug, Clone)]
pub struct ScreenNavigator {
    component_id: ComponentId,
    commands: CommandQueue,
}

impl ScreenNavigator {
    pub fn new(component_id: ComponentId, commands: CommandQueue) -> Self {
        Self {
            component_id,
            commands,
        }
    }

    pub fn component_id(&self) -> ComponentId {
        self.component_id
    }
}

impl NavigatorDelegate for ScreenNavigator {
    fn dismiss_screen(&self) {
        self.commands.push(NavigationCommand::Dismiss(self.component_id));
    }

    fn merge_options(&self, patch: OptionsPatch) {
        self.commands
            .push(NavigationCommand::MergeOptions(self.component_id, patch));
    }

    fn show_overlay(&self, screen: Box<dyn Screen>, options: ScreenOptions) {
        self.commands.push(NavigationCommand::ShowOverlay(screen, options));
    }
}

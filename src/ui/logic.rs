//! 业务逻辑处理 (Update/Dispatch)
//!
//! 所有对计数器的修改都经过这里

use chrono::Local;

use super::actions::Action;
use super::state::{App, Control};

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        tracing::debug!(?action, value = self.counter.value(), "dispatch");

        match action {
            Action::Quit => return true,

            Action::Increment => self.activate(Control::Increment),
            Action::Reset => self.activate(Control::Reset),
            Action::Click(control) => self.activate(control),
            Action::Activate => self.activate(self.focus),

            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrev => self.set_focus(self.focus.prev()),
        }
        false
    }

    /// 触发控件：焦点移到该控件并执行对应操作
    pub fn activate(&mut self, control: Control) {
        self.set_focus(control);
        match control {
            Control::Increment => self.counter.increment(),
            Control::Reset => self.counter.reset(),
        }

        let verb = match control {
            Control::Increment => "计数 +1",
            Control::Reset => "计数已归零",
        };
        self.message = Some(format!("{} ({})", verb, Local::now().format("%H:%M:%S")));
    }

    pub fn set_focus(&mut self, control: Control) {
        if self.focus != control {
            self.focus = control;
            self.request_redraw();
        }
    }
}

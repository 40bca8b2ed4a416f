//! App 状态定义 (Model)
//!
//! App 持有计数器视图模型，并通过观察者回调得知何时需要重绘

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::{Position, Rect};

use crate::config::{Config, Labels};
use crate::models::{Counter, SubscriptionId};

/// 可聚焦的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Increment,
    Reset,
}

impl Control {
    pub fn next(self) -> Self {
        match self {
            Control::Increment => Control::Reset,
            Control::Reset => Control::Increment,
        }
    }

    // 只有两个控件，前后切换相同
    pub fn prev(self) -> Self {
        self.next()
    }
}

/// 上一帧中按钮所在区域，用于鼠标命中检测
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlAreas {
    pub increment: Rect,
    pub reset: Rect,
}

impl ControlAreas {
    pub fn hit(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        if self.increment.contains(pos) {
            Some(Control::Increment)
        } else if self.reset.contains(pos) {
            Some(Control::Reset)
        } else {
            None
        }
    }
}

/// 应用状态
pub struct App {
    pub counter: Counter,
    pub focus: Control,
    pub labels: Labels,
    pub areas: ControlAreas,
    pub message: Option<String>,
    needs_redraw: Rc<Cell<bool>>,
    #[allow(dead_code)]
    redraw_subscription: SubscriptionId,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config) -> Self {
        let mut counter = Counter::new();
        let needs_redraw = Rc::new(Cell::new(true));

        let flag = Rc::clone(&needs_redraw);
        let redraw_subscription = counter.subscribe(move |value| {
            tracing::trace!(value, "counter changed, scheduling redraw");
            flag.set(true);
        });

        Self {
            counter,
            focus: Control::Increment,
            labels: config.labels.clone(),
            areas: ControlAreas::default(),
            message: None,
            needs_redraw,
            redraw_subscription,
        }
    }

    /// 读取并清除重绘标记
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    /// 视图状态变化（焦点、尺寸）也需要重绘
    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }
}

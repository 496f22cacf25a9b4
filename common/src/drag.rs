//! タグ列の横ドラッグスクロール
//!
//! マウス/タッチのドラッグで横スクロールさせつつ、動かさずに離した場合は
//! 下にあるタグボタンのクリックを通す。時刻は呼び出し側から渡す（ms）。

/// ポインタ移動量に掛けるスクロール倍率
pub const SCROLL_SPEED: f64 = 2.0;

/// これを超えて動いたらドラッグとみなす（px）
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// ドラッグ終了後にクリックを無視する時間（ms）
pub const CLICK_GRACE_MS: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragOrigin {
    start_x: f64,
    start_scroll: f64,
}

/// ドラッグ状態
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragScroll {
    origin: Option<DragOrigin>,
    dragged: bool,
    suppress_until: Option<f64>,
}

impl DragScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// 押下位置とその時点のスクロール量を記録
    pub fn pointer_down(&mut self, x: f64, scroll_left: f64) {
        self.origin = Some(DragOrigin {
            start_x: x,
            start_scroll: scroll_left,
        });
        self.dragged = false;
    }

    /// 移動中の新しいスクロール量を返す。押下中でなければ None
    pub fn pointer_move(&mut self, x: f64) -> Option<f64> {
        let origin = self.origin?;
        let moved = x - origin.start_x;
        if moved.abs() > DRAG_THRESHOLD_PX {
            self.dragged = true;
        }
        let delta = moved * SCROLL_SPEED;
        Some(origin.start_scroll - delta)
    }

    /// 離す・領域外へ出る・タッチ終了
    pub fn pointer_up(&mut self, now_ms: f64) {
        if self.origin.take().is_some() && self.dragged {
            self.suppress_until = Some(now_ms + CLICK_GRACE_MS);
        }
        self.dragged = false;
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some() && self.dragged
    }

    /// クリックを処理してよいか
    pub fn allows_click(&self, now_ms: f64) -> bool {
        if self.is_dragging() {
            return false;
        }
        match self.suppress_until {
            Some(until) => now_ms >= until,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut drag = DragScroll::new();
        assert_eq!(drag.pointer_move(40.0), None);
        assert!(!drag.is_active());
    }

    #[test]
    fn test_scroll_offset_follows_pointer_with_multiplier() {
        let mut drag = DragScroll::new();
        drag.pointer_down(100.0, 50.0);
        assert_eq!(drag.pointer_move(90.0), Some(70.0));
        assert_eq!(drag.pointer_move(130.0), Some(-10.0));
    }

    #[test]
    fn test_small_movement_keeps_click() {
        let mut drag = DragScroll::new();
        drag.pointer_down(100.0, 0.0);
        drag.pointer_move(104.0);
        drag.pointer_move(95.0);
        assert!(!drag.is_dragging());
        drag.pointer_up(1_000.0);
        assert!(drag.allows_click(1_000.0));
    }

    #[test]
    fn test_exactly_threshold_is_not_a_drag() {
        let mut drag = DragScroll::new();
        drag.pointer_down(10.0, 0.0);
        drag.pointer_move(15.0);
        drag.pointer_up(0.0);
        assert!(drag.allows_click(0.0));
    }

    #[test]
    fn test_drag_suppresses_click_until_grace_elapses() {
        let mut drag = DragScroll::new();
        drag.pointer_down(100.0, 0.0);
        drag.pointer_move(120.0);
        assert!(drag.is_dragging());
        assert!(!drag.allows_click(500.0));

        drag.pointer_up(1_000.0);
        assert!(!drag.is_active());
        assert!(!drag.allows_click(1_000.0));
        assert!(!drag.allows_click(1_000.0 + CLICK_GRACE_MS - 1.0));
        assert!(drag.allows_click(1_000.0 + CLICK_GRACE_MS));
    }

    #[test]
    fn test_moving_back_does_not_undo_drag() {
        let mut drag = DragScroll::new();
        drag.pointer_down(100.0, 0.0);
        drag.pointer_move(80.0);
        drag.pointer_move(100.0);
        drag.pointer_up(0.0);
        assert!(!drag.allows_click(10.0));
    }

    #[test]
    fn test_new_press_resets_drag_flag() {
        let mut drag = DragScroll::new();
        drag.pointer_down(0.0, 0.0);
        drag.pointer_move(50.0);
        drag.pointer_up(0.0);

        drag.pointer_down(200.0, 0.0);
        drag.pointer_up(500.0);
        assert!(drag.allows_click(500.0));
    }
}

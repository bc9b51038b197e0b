//! Terminal rendering of the achievement mosaic.
//!
//! Opaque cells are drawn as shaded blocks with their rounded corners cut
//! away; unlocked cells show the backdrop pattern through a thin outline.
//! The animating cell is drawn from its sampled [`CellFrame`].

use mosaic::achievements::{AchievementProgress, Rarity};
use mosaic::core::presenter::{PresentationStage, UnlockPresenter};
use mosaic::grid::{corners_for, AchievementGridState, CellState, CornerFlags, GridCell};
use mosaic::unlock::CellFrame;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Layout units per terminal column. Rows are twice as tall.
pub const UNITS_PER_COLUMN: f64 = 8.0;

/// Terminal footprint of one mosaic cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub cols: u16,
    pub rows: u16,
}

impl CellMetrics {
    pub fn from_cell_size(cell_size: f64) -> Self {
        let cols = (cell_size / UNITS_PER_COLUMN).floor().clamp(4.0, 12.0) as u16;
        Self {
            cols,
            rows: (cols / 2).max(2),
        }
    }
}

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::White,
        Rarity::Uncommon => Color::Green,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
    }
}

/// Backdrop seen through unlocked windows.
fn backdrop_at(x: u16, y: u16) -> (char, Color) {
    const PALETTE: [Color; 4] = [Color::Cyan, Color::LightBlue, Color::Blue, Color::LightCyan];
    let band = ((x / 3).wrapping_add(y) % PALETTE.len() as u16) as usize;
    let glyph = if x.wrapping_add(y) % 2 == 0 { '░' } else { '·' };
    (glyph, PALETTE[band])
}

fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, ch: char, style: Style) {
    if x >= area.x && x < area.right() && y >= area.y && y < area.bottom() {
        buf.get_mut(x, y).set_char(ch).set_style(style);
    }
}

/// Which corner, if any, a position inside a cell sits on.
fn corner_at(dx: u16, dy: u16, m: CellMetrics, flags: CornerFlags) -> Option<(bool, char)> {
    let right = dx + 1 == m.cols;
    let bottom = dy + 1 == m.rows;
    match (dx == 0, right, dy == 0, bottom) {
        (true, _, true, _) => Some((flags.top_left, '╭')),
        (_, true, true, _) => Some((flags.top_right, '╮')),
        (true, _, _, true) => Some((flags.bottom_left, '╰')),
        (_, true, _, true) => Some((flags.bottom_right, '╯')),
        _ => None,
    }
}

/// Bar columns filled for `progress` across `width` columns.
fn progress_fill(progress: AchievementProgress, width: u16) -> u16 {
    let filled = (progress.percentage() / 100.0 * width as f64).round();
    (filled as u16).min(width)
}

fn draw_opaque_cell(buf: &mut Buffer, area: Rect, origin: (u16, u16), m: CellMetrics, cell: &GridCell, flags: CornerFlags) {
    let (fill, style) = match cell.state {
        CellState::Visible => ('▓', Style::default().fg(Color::Gray)),
        _ if cell.is_filler() => ('█', Style::default().fg(Color::Black)),
        _ => ('█', Style::default().fg(Color::DarkGray)),
    };

    for dy in 0..m.rows {
        for dx in 0..m.cols {
            let (x, y) = (origin.0.saturating_add(dx), origin.1.saturating_add(dy));
            match corner_at(dx, dy, m, flags) {
                Some((true, _)) => {
                    let (glyph, color) = backdrop_at(x, y);
                    put(buf, area, x, y, glyph, Style::default().fg(color));
                }
                _ => put(buf, area, x, y, fill, style),
            }
        }
    }

    if cell.state != CellState::Visible {
        return;
    }
    let Some(def) = cell.achievement.as_ref() else {
        return;
    };
    let color = rarity_color(def.rarity);
    let icon_style = Style::default()
        .fg(color)
        .bg(Color::Gray)
        .add_modifier(Modifier::BOLD);
    let icon = def.icon.chars().next().unwrap_or('?');
    put(
        buf,
        area,
        origin.0.saturating_add(m.cols / 2),
        origin.1.saturating_add(m.rows / 2 - 1),
        icon,
        icon_style,
    );

    // Progress bar along the bottom row, between the corners.
    if let Some(progress) = cell.progress {
        let width = m.cols.saturating_sub(2);
        let filled = progress_fill(progress, width);
        let y = origin.1.saturating_add(m.rows - 1);
        for i in 0..width {
            let x = origin.0.saturating_add(1 + i);
            let (glyph, bar_style) = if i < filled {
                ('▬', Style::default().fg(color).bg(Color::Gray))
            } else {
                ('─', Style::default().fg(Color::DarkGray).bg(Color::Gray))
            };
            put(buf, area, x, y, glyph, bar_style);
        }
    }
}

fn draw_window_cell(buf: &mut Buffer, area: Rect, origin: (u16, u16), m: CellMetrics, cell: &GridCell, flags: CornerFlags) {
    let color = cell
        .achievement
        .as_ref()
        .map(|d| rarity_color(d.rarity))
        .unwrap_or(Color::White);

    for dy in 0..m.rows {
        for dx in 0..m.cols {
            let (x, y) = (origin.0.saturating_add(dx), origin.1.saturating_add(dy));
            match corner_at(dx, dy, m, flags) {
                Some((true, glyph)) => put(buf, area, x, y, glyph, Style::default().fg(color)),
                _ => {
                    let (glyph, bg) = backdrop_at(x, y);
                    put(buf, area, x, y, glyph, Style::default().fg(bg));
                }
            }
        }
    }
}

fn crack_glyph(angle: f64) -> char {
    let deg = angle.to_degrees().rem_euclid(180.0);
    match deg {
        d if !(22.5..157.5).contains(&d) => '─',
        d if d < 67.5 => '╲',
        d if d < 112.5 => '│',
        _ => '╱',
    }
}

fn draw_animating_cell(
    buf: &mut Buffer,
    area: Rect,
    origin: (u16, u16),
    m: CellMetrics,
    cell: &GridCell,
    frame: &CellFrame,
) {
    let shift = frame.tremor_offset.round() as i32;
    let origin = ((origin.0 as i32 + shift).clamp(0, u16::MAX as i32) as u16, origin.1);

    if frame.flash_intensity > 0.4 {
        let style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        for dy in 0..m.rows {
            for dx in 0..m.cols {
                put(buf, area, origin.0.saturating_add(dx), origin.1.saturating_add(dy), '█', style);
            }
        }
    } else if frame.overlay_opacity > 0.0 {
        let style = Style::default().fg(Color::Gray);
        let fill = if frame.scale > 1.0 { '▓' } else { '▒' };
        for dy in 0..m.rows {
            for dx in 0..m.cols {
                put(buf, area, origin.0.saturating_add(dx), origin.1.saturating_add(dy), fill, style);
            }
        }
    } else {
        draw_window_cell(buf, area, origin, m, cell, CornerFlags::ROUND);
    }

    let center_x = origin.0 as f64 + m.cols as f64 / 2.0;
    let center_y = origin.1 as f64 + m.rows as f64 / 2.0;

    for (crack, opacity) in &frame.cracks {
        if *opacity < 0.3 {
            continue;
        }
        let reach = crack.length / UNITS_PER_COLUMN;
        let steps = reach.ceil().max(1.0) as usize;
        let style = Style::default().fg(if *opacity > 0.7 { Color::White } else { Color::Gray });
        for step in 1..=steps {
            let d = step as f64;
            let x = center_x + crack.angle.cos() * d;
            let y = center_y + crack.angle.sin() * d / 2.0;
            put(buf, area, x as u16, y as u16, crack_glyph(crack.angle), style);
        }
    }

    for shard in &frame.shards {
        let x = center_x + shard.x / UNITS_PER_COLUMN;
        let y = center_y + shard.y / (UNITS_PER_COLUMN * 2.0);
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let glyph = if shard.size > 15.0 { '◆' } else { '◇' };
        let color = if shard.opacity > 0.5 { Color::White } else { Color::DarkGray };
        put(buf, area, x as u16, y as u16, glyph, Style::default().fg(color));
    }
}

/// Terminal offset of the `index`th cell, clamped to the terminal range.
fn grid_offset(index: usize, step: u16) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX).saturating_mul(step)
}

/// Draws the mosaic into `area`, centered.
pub fn render_mosaic(
    frame: &mut Frame,
    area: Rect,
    grid: &AchievementGridState,
    metrics: CellMetrics,
    animating: Option<(&str, &CellFrame)>,
) {
    let width = grid_offset(grid.size(), metrics.cols).min(area.width);
    let height = grid_offset(grid.size(), metrics.rows).min(area.height);
    let left = area.x + (area.width - width) / 2;
    let top = area.y + (area.height - height) / 2;

    let buf = frame.buffer_mut();
    for cell in grid.cells() {
        let origin = (
            left.saturating_add(grid_offset(cell.col, metrics.cols)),
            top.saturating_add(grid_offset(cell.row, metrics.rows)),
        );
        let flags = corners_for(grid, cell.row, cell.col);

        match animating {
            Some((id, cell_frame)) if cell.achievement_id() == Some(id) => {
                draw_animating_cell(buf, area, origin, metrics, cell, cell_frame);
            }
            _ if cell.state == CellState::Unlocked => {
                draw_window_cell(buf, area, origin, metrics, cell, flags);
            }
            _ => draw_opaque_cell(buf, area, origin, metrics, cell, flags),
        }
    }
}

/// Side panel with counts, queue and recent diagnostics.
pub fn render_status<R: Rng>(
    frame: &mut Frame,
    area: Rect,
    grid: &AchievementGridState,
    presenter: &UnlockPresenter<R>,
    notes: &[String],
) {
    let block = Block::default()
        .title(" Mosaic ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stage = match presenter.stage() {
        PresentationStage::Idle => "idle".to_string(),
        PresentationStage::Animating => format!("animating ({})", presenter.orchestrator().phase().name()),
        PresentationStage::Celebrating { .. } => "celebrating".to_string(),
        PresentationStage::Detail => "detail".to_string(),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Unlocked  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", grid.unlocked_count(), grid.total_count()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Complete  ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:.1}%", grid.completion_percentage())),
        ]),
        Line::from(vec![
            Span::styled("Visible   ", Style::default().fg(Color::DarkGray)),
            Span::raw(grid.visible_count().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Queue     ", Style::default().fg(Color::DarkGray)),
            Span::raw(presenter.queue().len().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Stage     ", Style::default().fg(Color::DarkGray)),
            Span::styled(stage, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
    ];
    for note in notes.iter().rev().take(6) {
        lines.push(Line::from(Span::styled(
            note.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);
    let help = Paragraph::new("[u] Unlock  [b] Batch  [c] Skip\n[Enter] Dismiss  [q] Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Banner or detail card for the unlock being presented.
pub fn render_presentation<R: Rng>(frame: &mut Frame, area: Rect, presenter: &UnlockPresenter<R>) {
    let Some(current) = presenter.current() else {
        return;
    };
    let def = &current.achievement;
    let color = rarity_color(def.rarity);

    match presenter.stage() {
        PresentationStage::Celebrating { .. } => {
            let banner = Rect::new(area.x, area.y, area.width, 3.min(area.height));
            frame.render_widget(Clear, banner);
            let text = Line::from(Span::styled(
                format!("★ {} {} ★", def.icon, def.name),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            let widget = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
            frame.render_widget(widget, banner);
        }
        PresentationStage::Detail => {
            let card = centered(area, 44, 9);
            frame.render_widget(Clear, card);
            let unlocked_at = chrono::DateTime::from_timestamp(current.timestamp, 0)
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            let lines = vec![
                Line::from(Span::styled(
                    format!("{} {}", def.icon, def.name),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(def.rarity.name(), Style::default().fg(color))),
                Line::from(""),
                Line::from(def.description.as_str()),
                Line::from(Span::styled(
                    format!("Unlocked {}", unlocked_at),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "[Enter] Continue",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let widget = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(" Achievement Unlocked ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                );
            frame.render_widget(widget, card);
        }
        _ => {}
    }
}

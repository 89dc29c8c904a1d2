use crate::app::{AppMode, RenderState};
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_source_pane(state: &RenderState, scroll: (u16, u16)) -> Paragraph<'static> {
    let lines: Vec<Line> = state
        .input_lines
        .iter()
        .map(|line| Line::from(line.clone()))
        .collect();

    let border_style = if state.mode == AppMode::Edit {
        Style::default().fg(colors::accent())
    } else {
        Style::default().fg(colors::dimmed())
    };

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Source"),
        )
        .style(Style::default().fg(colors::text()).bg(colors::background()))
        .scroll(scroll)
}

pub fn render_result_pane(state: &RenderState) -> Paragraph<'static> {
    Paragraph::new(state.output.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::dimmed()))
                .title("Result"),
        )
        .style(Style::default().fg(colors::text()).bg(colors::background()))
        .wrap(Wrap { trim: false })
}

pub fn render_settings_bar(state: &RenderState) -> Paragraph<'static> {
    let active = Style::default()
        .fg(colors::accent())
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(colors::dimmed());

    let mask_label = format!("(\u{25CF}) underscores ({})", state.width);
    let remove_label = "(\u{25CF}) remove".to_string();

    let spans = if state.mask_enabled {
        vec![
            Span::styled(mask_label, active),
            Span::raw("   "),
            Span::styled("( ) remove", inactive),
        ]
    } else {
        vec![
            Span::styled(format!("( ) underscores ({})", state.width), inactive),
            Span::raw("   "),
            Span::styled(remove_label, active),
        ]
    };

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors::background()))
}

pub fn render_status_line(state: &RenderState) -> Paragraph<'static> {
    let line = match state.mode {
        AppMode::Command => Line::from(vec![
            Span::styled("> ", Style::default().fg(colors::accent())),
            Span::styled(
                state.command_buffer.clone(),
                Style::default().fg(colors::text()),
            ),
            Span::styled("\u{2588}", Style::default().fg(colors::accent())),
        ]),
        _ => match &state.status {
            Some(status) => Line::from(Span::styled(
                status.clone(),
                Style::default().fg(colors::warning()),
            )),
            None => Line::from(Span::styled(
                "Esc command deck \u{00B7} F1 help \u{00B7} F2 mode \u{00B7} F3/F4 width \u{00B7} F5 paste \u{00B7} F6 copy \u{00B7} F7 auto \u{00B7} F8 reset",
                Style::default().fg(colors::dimmed()),
            )),
        },
    };

    Paragraph::new(line)
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors::background()))
}

pub fn render_help() -> Paragraph<'static> {
    let text = vec![
        Line::from("Type into the Source pane; the Result pane regenerates on every change."),
        Line::from(""),
        Line::from("Keys"),
        Line::from("  F2         toggle between underscores and remove"),
        Line::from("  F3 / F4    shrink / grow the placeholder (1-8)"),
        Line::from("  F5         paste clipboard into Source"),
        Line::from("  F6         copy Result to clipboard"),
        Line::from("  F7         auto: clipboard in, transformed clipboard out"),
        Line::from("  F8         reset the Source pane"),
        Line::from("  Esc        open the command deck"),
        Line::from("  Ctrl+Q     quit"),
        Line::from(""),
        Line::from("Command deck"),
        Line::from("  :mask [n]  :remove  :width n"),
        Line::from("  :paste  :copy  :auto  :reset  :sample"),
        Line::from("  @path      load a txt/md/pdf/epub file"),
        Line::from("  @@         load the clipboard"),
        Line::from("  :q         quit"),
        Line::from(""),
        Line::from("Press any key to close this help."),
    ];

    Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::accent()))
                .title("Help"),
        )
        .style(Style::default().fg(colors::text()).bg(colors::background()))
}

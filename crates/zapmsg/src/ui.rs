use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};
use zapmsg_core::{Clock, ContactStatus, SendSession, SystemClock, format_phone_for_display, render};

use crate::state::{AppState, Scene, StatusKind, TextBuffer};

const ACCENT: Color = Color::Green;

pub fn draw(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(f.area());

    draw_header(f, chunks[0], state.scene);

    match state.scene {
        Scene::Import => draw_import(f, chunks[1], state),
        Scene::Compose => draw_compose(f, chunks[1], state),
        Scene::Send => match &state.session {
            Some(session) => draw_dashboard(f, chunks[1], state, session),
            None => f.render_widget(Paragraph::new("Nenhuma campanha ativa."), chunks[1]),
        },
    }

    draw_footer(f, chunks[2], state);

    if state.confirm_reset {
        draw_reset_dialog(f);
    }
}

fn draw_header(f: &mut Frame, area: Rect, current: Scene) {
    let mut spans = Vec::new();
    for (i, scene) in Scene::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ─── ", Style::default().fg(Color::DarkGray)));
        }

        let (marker, style) = match (*scene as usize).cmp(&(current as usize)) {
            std::cmp::Ordering::Less => ("✔", Style::default().fg(ACCENT)),
            std::cmp::Ordering::Equal => (
                "●",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            std::cmp::Ordering::Greater => ("○", Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(format!("{} {}", marker, scene.label()), style));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 💬 ZapMessage AI ")
                .border_style(Style::default().fg(ACCENT)),
        );
    f.render_widget(header, area);
}

fn draw_import(f: &mut Frame, area: Rect, state: &AppState) {
    let error_height = if state.import.error.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(error_height),
            Constraint::Length(1),
        ])
        .split(area);

    let input = Paragraph::new(with_cursor(&state.import.input))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Importar Contatos · cole sua lista (Nome, Telefone) "),
        );
    f.render_widget(input, chunks[0]);

    if let Some(error) = &state.import.error {
        let error = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL).title(" Erro "));
        f.render_widget(error, chunks[1]);
    }

    let hint = Paragraph::new("Inclua o código do país (ex: 55 para Brasil).")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, chunks[2]);
}

fn draw_compose(f: &mut Frame, area: Rect, state: &AppState) {
    let ai_height = if state.compose.ai.open { 6 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ai_height),
            Constraint::Min(4),
            Constraint::Length(4),
        ])
        .split(area);

    if state.compose.ai.open {
        draw_ai_panel(f, chunks[0], state);
    }

    let editor = Paragraph::new(with_cursor(&state.compose.message))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    " Mensagem para {} contatos · variáveis: {{nome}} {{saudacao}} ",
                    state.contacts.len()
                )),
        );
    f.render_widget(editor, chunks[1]);

    // Preview with the first contact and the current greeting
    let preview = match state.contacts.first() {
        Some(contact) if !state.compose.message.is_blank() => {
            render(state.compose.message.as_str(), contact, SystemClock.now())
        }
        _ => String::from("Digite uma mensagem para ver a prévia."),
    };
    let preview = Paragraph::new(preview)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title(" Prévia "));
    f.render_widget(preview, chunks[2]);
}

fn draw_ai_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let ai = &state.compose.ai;
    let emoji = if ai.include_emoji { "sim" } else { "não" };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Tema: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{}▏", ai.topic.as_str())),
        ]),
        Line::from(vec![
            Span::styled("Tom: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(ai.tone.label(), Style::default().fg(Color::Magenta)),
            Span::raw("   "),
            Span::styled("Emojis: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(emoji),
        ]),
    ];
    if ai.generating {
        lines.push(Line::styled(
            "✨ Gerando...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" ✨ Gerar com IA ")
            .border_style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(panel, area);
}

fn draw_dashboard(f: &mut Frame, area: Rect, state: &AppState, session: &SendSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(3),
        ])
        .split(area);

    let stats = session.stats();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progresso "))
        .gauge_style(Style::default().fg(ACCENT))
        .percent(u16::from(stats.progress))
        .label(format!(
            "{}% · {} enviados · {} pendentes · {} pulados",
            stats.progress, stats.sent, stats.pending, stats.skipped
        ));
    f.render_widget(gauge, chunks[0]);

    draw_next_card(f, chunks[1], state, session);
    draw_history(f, chunks[2], state, session);
}

fn draw_next_card(f: &mut Frame, area: Rect, state: &AppState, session: &SendSession) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let Some(next) = session.next_pending() else {
        let done = Paragraph::new(vec![
            Line::styled(
                "🎉 Lista Finalizada!",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Line::raw("Todos os contatos foram processados."),
            Line::styled(
                "[n] Nova campanha",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(done, area);
        return;
    };

    let waiting = match session.awaiting() {
        Some(id) if id == next.id() && state.auto_confirm => {
            "Aguardando retorno do WhatsApp..."
        }
        Some(id) if id == next.id() => "Enviou? Pressione [m] para confirmar.",
        _ => "[Enter] Abrir conversa",
    };

    let card = Paragraph::new(vec![
        Line::styled("PRÓXIMO CONTATO", Style::default().fg(Color::DarkGray)),
        Line::styled(
            next.name(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(format_phone_for_display(next.phone())),
        Line::from(vec![
            Span::styled(waiting, Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("  ·  {}", session.mode().label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ])
    .block(block);
    f.render_widget(card, area);
}

fn draw_history(f: &mut Frame, area: Rect, state: &AppState, session: &SendSession) {
    let next_id = session.next_pending().map(|c| c.id());

    let items: Vec<ListItem> = session
        .contacts()
        .iter()
        .map(|contact| {
            let (label, style) = if Some(contact.id()) == next_id {
                (
                    "Próximo",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                let style = match contact.status() {
                    ContactStatus::Pending => Style::default(),
                    ContactStatus::Sent => Style::default().fg(ACCENT),
                    ContactStatus::Skipped => Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                };
                (contact.status().label(), style)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<24}", contact.name()), style),
                Span::styled(
                    format!("{:<20}", format_phone_for_display(contact.phone())),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(label, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Histórico ({}) ", session.contacts().len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let keys = match state.scene {
        Scene::Import => "[Ctrl+S] Processar  [Ctrl+E] Exemplo  [Ctrl+L] Limpar  [Ctrl+Q] Sair",
        Scene::Compose if state.compose.ai.open => {
            "[Enter] Gerar  [Tab] Tom  [Ctrl+E] Emojis  [Esc] Fechar"
        }
        Scene::Compose => {
            "[Ctrl+S] Iniciar envios  [Ctrl+N] {nome}  [Ctrl+G] {saudacao}  [Ctrl+A] IA  [Esc] Voltar"
        }
        Scene::Send => {
            "[Enter] Enviar  [m] Marcar enviado  [s] Pular  [↑↓] Selecionar  [e/p] Enviado/Pulado  [w] Modo  [n] Nova lista  [Esc] Voltar"
        }
    };

    let status = match &state.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => Color::Cyan,
                StatusKind::Success => ACCENT,
                StatusKind::Error => Color::Red,
            };
            Line::styled(status.text.as_str(), Style::default().fg(color))
        }
        None => Line::raw(""),
    };

    let footer = Paragraph::new(vec![
        status,
        Line::styled(keys, Style::default().fg(Color::DarkGray)),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}

fn draw_reset_dialog(f: &mut Frame) {
    let area = centered(f.area(), 50, 7);

    let dialog = Paragraph::new(vec![
        Line::raw("Deseja iniciar uma nova campanha?"),
        Line::raw("A lista e a mensagem atuais serão descartadas."),
        Line::raw(""),
        Line::styled(
            "[s] Sim    [n] Não",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Nova campanha ")
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn with_cursor(buffer: &TextBuffer) -> Text<'static> {
    Text::raw(format!("{}▏", buffer.as_str()))
}

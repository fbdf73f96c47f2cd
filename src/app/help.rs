use crate::app::state::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

impl App {
    pub fn render_help(&self, f: &mut Frame) {
        if !self.show_help {
            return;
        }

        let area = f.area();
        let help_width = 62.min(area.width.saturating_sub(4));
        let help_height = 22.min(area.height.saturating_sub(4));
        let help_area = Rect::new(
            (area.width - help_width) / 2,
            (area.height - help_height) / 2,
            help_width,
            help_height,
        );
        f.render_widget(Clear, help_area);

        let tab_titles = ["[1]Controles", "[2]Rutas"];
        let mut tab_spans = Vec::new();
        for (i, title) in tab_titles.iter().enumerate() {
            if i == self.help_tab as usize {
                tab_spans.push(ratatui::text::Span::styled(
                    format!(" {} ", title),
                    Style::default().bg(Color::Cyan).fg(Color::Black),
                ));
            } else {
                tab_spans.push(ratatui::text::Span::styled(
                    format!(" {} ", title),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        let help_content: Vec<&str> = match self.help_tab {
            0 => vec![
                "",
                " ⌨️  NAVEGACIÓN GENERAL",
                " ─────────────────────────────────",
                " [Q]       Salir",
                " [H]       Mostrar/ocultar esta ayuda",
                " [M]/[Esc] Volver al mapa",
                "",
                " 🗺️  MAPA",
                " ─────────────────────────────────",
                " [←/→]     Cambiar de punto",
                " [Enter]   Abrir el punto seleccionado",
                " [0-6]     Abrir capítulo directo",
                " [E] Explorador  [C] Calculadora",
                " [F/O/P/S/B]     Páginas informativas",
                "",
                " 🌎 EXPLORADOR",
                " ─────────────────────────────────",
                " [A/O/C]   Ciclar Ambiente/Origen/Clima",
                " [U] Filtro UICN  [B] Biótico/Abiótico",
                " [X] Limpiar     [S] Sugerir",
                "",
                " 🌱 CALCULADORA",
                " ─────────────────────────────────",
                " [←/→] ±1k ha  [-/+] ±10k ha",
                " [Y] Año base  [F] Fase  [X] Restablecer",
            ],
            1 => vec![
                "",
                " 🧭 RUTAS DE LA PRESENTACIÓN",
                " ─────────────────────────────────",
                " intro                    Pantalla inicial",
                " mapa                     Mapa de capítulos",
                " capitulo/<id>            Capítulo por número",
                " cero                     Explorador de ecosistemas",
                " pagina-18                Calculadora de CO₂",
                " fotosintesis             Fotosíntesis y respiración",
                " fotosintesis-4           Organismos fotosintéticos",
                " produccion-fotosintetica Producción fotosintética",
                " energia-solar            Energía solar",
                " biomas                   Biomas",
                "",
                " Un capítulo desconocido muestra la pantalla",
                " de recuperación con regreso al mapa.",
            ],
            _ => vec![""],
        };

        let mut lines: Vec<ratatui::text::Line> = Vec::new();
        lines.push(ratatui::text::Line::from(tab_spans));
        for line in help_content {
            lines.push(ratatui::text::Line::from(line));
        }

        f.render_widget(
            Paragraph::new(lines).block(Block::default().title(" 📖 Ayuda ").borders(Borders::ALL)),
            help_area,
        );
    }
}

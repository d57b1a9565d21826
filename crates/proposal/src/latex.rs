//! XeLaTeX source document
//!
//! The output is compiled by an external XeLaTeX toolchain. It contains one
//! intentionally non-deterministic directive, `\date{\today}`, which the
//! typesetter resolves at compile time.

use crate::escape::escape_latex as tex;
use crate::renderer::{DocumentRenderer, RenderContext};
use crate::sections::Section;
use std::fmt::{self, Write};

const PACKAGES: &str = r"\documentclass[a4paper,12pt]{article}
\usepackage{geometry}
\geometry{top=2.5cm, bottom=2.5cm, left=2.5cm, right=2.5cm}
\usepackage{fontspec}
\usepackage{xeCJK}
\usepackage{tikz}
\usepackage{array}
\usepackage{booktabs}
\usepackage{xcolor}
\usepackage{colortbl}
\usepackage{graphicx}
\usepackage{float}
";

const COLORS: &str = r"% Color Definitions
\definecolor{pbGold}{RGB}{184, 134, 11}
\definecolor{pbDark}{RGB}{33, 44, 60}
\definecolor{pbLight}{RGB}{245, 245, 245}
\definecolor{pbRed}{RGB}{185, 28, 28}
";

/// Infographic node placement: top, lower left, lower right
const NODE_ANGLES: [u32; 3] = [90, 210, 330];

/// Renders the proposal as XeLaTeX source
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexRenderer;

impl LatexRenderer {
    fn client_overview(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        let p = ctx.proposal;
        let client = tex(&p.client.name);

        writeln!(out, r"\section*{{{}: {}}}", tex(t.overview_heading), client)?;
        writeln!(out)?;
        writeln!(
            out,
            r"\textbf{{{}{}{}}}{}{}{}",
            tex(t.salutation_prefix),
            client,
            tex(t.salutation_suffix),
            tex(t.intro_lead),
            tex(&p.plan_name),
            tex(t.intro_tail)
        )?;
        writeln!(out)?;
        writeln!(out, r"\vspace{{1em}}")?;
        writeln!(out, r"\noindent")?;
        writeln!(out, r"\textbf{{{}:}}", tex(t.premium_info_label))?;
        writeln!(out, r"\begin{{itemize}}")?;
        writeln!(
            out,
            r"    \item {}: {} {}",
            tex(t.premium_total_label),
            tex(t.currency),
            tex(&ctx.projection.premium_total)
        )?;
        writeln!(
            out,
            r"    \item {}: {}",
            tex(t.payment_type_label),
            tex(&p.premium.payment_type)
        )?;
        writeln!(out, r"\end{{itemize}}")?;
        writeln!(out)
    }

    fn risk_disclosure(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;

        writeln!(out, r"\vspace{{1em}}")?;
        writeln!(out, r"\noindent")?;
        writeln!(out, r"\colorbox{{pbRed!10}}{{\parbox{{\dimexpr\linewidth-2\fboxsep}}{{")?;
        writeln!(out, r"  \textbf{{\textcolor{{pbRed}}{{{}:}}}}", tex(t.risk_heading))?;
        writeln!(out, r"  \begin{{itemize}}")?;
        for alert in &t.risk_alerts {
            write!(
                out,
                r"    \item \textbf{{{}:}} {}",
                tex(alert.title),
                tex(alert.before)
            )?;
            if !alert.emphasis.is_empty() {
                write!(out, r"\textbf{{\underline{{{}}}}}", tex(alert.emphasis))?;
            }
            writeln!(out, "{}", tex(alert.after))?;
        }
        writeln!(out, r"  \end{{itemize}}")?;
        writeln!(out, "}}}}")?;
        writeln!(out)
    }

    fn infographic(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;

        writeln!(out, r"\vspace{{2em}}")?;
        writeln!(out, r"\begin{{center}}")?;
        writeln!(out, r"\begin{{tikzpicture}}")?;
        writeln!(
            out,
            r"    \node[circle, draw=pbGold, line width=2pt, minimum size=4cm, align=center, fill=pbGold!10] (core) at (0,0) {{\textbf{{{}}}\\\textbf{{{}}}}};",
            tex(t.infographic_core[0]),
            tex(t.infographic_core[1])
        )?;
        for (i, (angle, labels)) in NODE_ANGLES.iter().zip(&t.infographic_nodes).enumerate() {
            writeln!(
                out,
                r"    \node[circle, fill=pbDark, text=white, minimum size=2.5cm, align=center] (node{i}) at ({angle}:3.5cm) {{{}\\{}}};",
                tex(labels[0]),
                tex(labels[1])
            )?;
        }
        for i in 0..NODE_ANGLES.len() {
            writeln!(
                out,
                r"    \draw[->, >=latex, line width=1.5pt, pbGold] (core) -- (node{i});"
            )?;
        }
        writeln!(out, r"\end{{tikzpicture}}")?;
        writeln!(out, r"\end{{center}}")?;
        writeln!(out)
    }

    fn scenario_a(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        let rows: Vec<[String; 4]> = ctx
            .projection
            .scenario_a
            .iter()
            .map(|row| {
                [
                    t.policy_year(row.year),
                    row.surrender.clone(),
                    row.death.clone(),
                    row.return_rate.clone(),
                ]
            })
            .collect();

        writeln!(out, r"\section*{{{}}}", tex(t.scenario_a_heading))?;
        writeln!(out)?;
        writeln!(out, "{}", tex(t.scenario_a_description))?;
        writeln!(out)?;
        write_table(
            out,
            [
                t.policy_year_column,
                t.surrender_column,
                t.death_column,
                t.return_column,
            ],
            &rows,
            t.scenario_a_caption,
        )
    }

    fn scenario_b(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        let rows: Vec<[String; 4]> = ctx
            .projection
            .scenario_b
            .iter()
            .map(|row| {
                [
                    t.policy_year(row.year),
                    row.cumulative.clone(),
                    row.remaining.clone(),
                    row.return_rate.clone(),
                ]
            })
            .collect();

        writeln!(out, r"\section*{{{}}}", tex(t.scenario_b_heading))?;
        writeln!(out)?;
        writeln!(
            out,
            r"{}\textbf{{{} {}}}{}",
            tex(t.scenario_b_lead),
            tex(t.currency),
            tex(&ctx.projection.annual_withdrawal),
            tex(t.scenario_b_tail)
        )?;
        writeln!(out)?;
        write_table(
            out,
            [
                t.policy_year_column,
                t.cumulative_column,
                t.remaining_column,
                t.return_column,
            ],
            &rows,
            t.scenario_b_caption,
        )
    }

    fn promotions(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        let projection = &ctx.projection;

        writeln!(out, r"\section*{{{}}}", tex(t.promotions_heading))?;
        writeln!(out)?;
        writeln!(out, r"\begin{{description}}")?;
        writeln!(
            out,
            r"    \item[{{{}:}}] {}",
            tex(t.rebate_title),
            tex(&projection.rebate)
        )?;
        write!(
            out,
            r"    \item[{{{}:}}] {}",
            tex(t.prepay_title),
            tex(&projection.prepay)
        )?;
        if let Some(note) = &projection.prepay_deadline {
            write!(out, " {}", tex(note))?;
        }
        writeln!(out)?;
        writeln!(out, r"\end{{description}}")?;
        writeln!(out)
    }

    fn disclaimer(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;

        writeln!(out, r"\vfill")?;
        writeln!(out, r"\noindent")?;
        writeln!(out, r"\rule{{\linewidth}}{{0.5pt}}")?;
        writeln!(out, r"\vspace{{0.5em}}")?;
        writeln!(out, r"\scriptsize")?;
        writeln!(
            out,
            r"\textbf{{{}:}} {}",
            tex(t.disclaimer_title),
            tex(t.disclaimer_body)
        )
    }
}

impl DocumentRenderer for LatexRenderer {
    fn begin(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        out.write_str(PACKAGES)?;
        writeln!(out)?;
        writeln!(out, "% Fonts Configuration")?;
        writeln!(out, r"\setmainfont{{Noto Sans}}")?;
        writeln!(out, r"\setCJKmainfont{{{}}}", ctx.script.cjk_sans_font())?;
        writeln!(out)?;
        out.write_str(COLORS)?;
        writeln!(out)?;
        writeln!(out, r"\title{{\bfseries\color{{pbDark}} {}}}", tex(ctx.text.title))?;
        writeln!(out, r"\author{{{}}}", tex(ctx.text.author))?;
        writeln!(out, r"\date{{\today}}")?;
        writeln!(out)?;
        writeln!(out, r"\begin{{document}}")?;
        writeln!(out)
    }

    fn page_break(&self, out: &mut dyn Write, _ctx: &RenderContext<'_>) -> fmt::Result {
        writeln!(out, r"\newpage")?;
        writeln!(out)
    }

    fn section(
        &self,
        out: &mut dyn Write,
        section: Section,
        ctx: &RenderContext<'_>,
    ) -> fmt::Result {
        match section {
            Section::Header => {
                writeln!(out, r"\maketitle")?;
                writeln!(out, r"\thispagestyle{{empty}}")?;
                writeln!(out)
            }
            Section::ClientOverview => self.client_overview(out, ctx),
            Section::RiskDisclosure => self.risk_disclosure(out, ctx),
            Section::Infographic => self.infographic(out, ctx),
            Section::ScenarioA => self.scenario_a(out, ctx),
            Section::ScenarioB => self.scenario_b(out, ctx),
            Section::Promotions => self.promotions(out, ctx),
            Section::Disclaimer => self.disclaimer(out, ctx),
        }
    }

    fn end(&self, out: &mut dyn Write, _ctx: &RenderContext<'_>) -> fmt::Result {
        writeln!(out)?;
        writeln!(out, r"\end{{document}}")
    }
}

/// Four-column centred table with a shaded header row and a caption
fn write_table(
    out: &mut dyn Write,
    columns: [&str; 4],
    rows: &[[String; 4]],
    caption: &str,
) -> fmt::Result {
    writeln!(out, r"\begin{{table}}[H]")?;
    writeln!(out, r"\centering")?;
    writeln!(out, r"\renewcommand{{\arraystretch}}{{1.5}}")?;
    writeln!(out, r"\begin{{tabular}}{{c|c|c|c}}")?;
    writeln!(out, r"\hline")?;
    writeln!(
        out,
        r"\rowcolor{{pbDark!10}} \textbf{{{}}} & \textbf{{{}}} & \textbf{{{}}} & \textbf{{{}}} \\",
        tex(columns[0]),
        tex(columns[1]),
        tex(columns[2]),
        tex(columns[3])
    )?;
    writeln!(out, r"\hline")?;
    for row in rows {
        writeln!(
            out,
            r"{} & {} & {} & {} \\",
            tex(&row[0]),
            tex(&row[1]),
            tex(&row[2]),
            tex(&row[3])
        )?;
    }
    writeln!(out, r"\hline")?;
    writeln!(out, r"\end{{tabular}}")?;
    writeln!(out, r"\caption{{{}}}", tex(caption))?;
    writeln!(out, r"\end{{table}}")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Proposal;
    use cjk_text::Script;

    fn render(proposal: &Proposal, script: Script) -> String {
        LatexRenderer
            .render(&RenderContext::new(proposal, script))
            .unwrap()
    }

    #[test]
    fn test_document_frame() {
        let src = render(&Proposal::default(), Script::Simplified);
        assert!(src.starts_with(r"\documentclass[a4paper,12pt]{article}"));
        assert!(src.contains(r"\begin{document}"));
        assert!(src.trim_end().ends_with(r"\end{document}"));
        assert!(src.contains(r"\date{\today}"));
    }

    #[test]
    fn test_cjk_font_follows_script() {
        let sc = render(&Proposal::default(), Script::Simplified);
        let tc = render(&Proposal::default(), Script::Traditional);
        assert!(sc.contains(r"\setCJKmainfont{Noto Sans CJK SC}"));
        assert!(tc.contains(r"\setCJKmainfont{Noto Sans CJK TC}"));
    }

    #[test]
    fn test_table_rows() {
        let src = render(&Proposal::default(), Script::Simplified);
        assert!(src.contains(r"第 10 年 & 580,000 & 1,200,000 & 116\% \\"));
        assert!(src.contains(r"第 40 年 & 1,000,000 & 900,000 & 380\% \\"));
        assert!(src.contains(r"\textbf{总回报率 (\%)}"));
        assert!(src.contains(r"\caption{资产隔离效益}"));
    }

    #[test]
    fn test_promotions() {
        let src = render(&Proposal::default(), Script::Simplified);
        assert!(src.contains(r"\item[{保费回赠:}] 一笔过 3.5\%"));
        assert!(src.contains(r"\item[{预缴利率 (锁定美息):}] 4.2\% (至 3月31日)"));
    }

    #[test]
    fn test_risk_alerts_escaped() {
        let src = render(&Proposal::default(), Script::Simplified);
        assert!(src.contains(r"\item \textbf{金税四期 \& CRS:}"));
        assert!(src.contains(r"\textbf{\underline{每年 18\%}}"));
    }

    #[test]
    fn test_infographic_nodes() {
        let src = render(&Proposal::default(), Script::Traditional);
        assert!(src.contains(r"(node0) at (90:3.5cm) {資產\\隔離};"));
        assert!(src.contains(r"(core) -- (node2);"));
        assert!(src.contains(r"{\textbf{稅務}\\\textbf{合規}};"));
    }

    #[test]
    fn test_special_characters_escaped() {
        let mut proposal = Proposal::default();
        proposal.client.name = "A&B_Co 100%".to_string();
        proposal.plan_name = "Plan {#1}".to_string();
        let src = render(&proposal, Script::Simplified);
        assert!(src.contains(r"\section*{合规概览: A\&B\_Co 100\%}"));
        assert!(src.contains(r"Plan \{\#1\}"));
    }

    #[test]
    fn test_page_break_before_scenario_a() {
        let src = render(&Proposal::default(), Script::Simplified);
        let newpage = src.find(r"\newpage").unwrap();
        let tikz = src.find(r"\end{tikzpicture}").unwrap();
        let scenario = src.find(r"\section*{情境 A").unwrap();
        assert!(tikz < newpage && newpage < scenario);
    }
}

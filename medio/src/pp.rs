//! Pretty printing of expressions.

use crate::expr::{Binder, Expr};
use crate::{Format, Level};
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Binding strength of the surrounding context.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
enum Prec {
    /// Top level, or right of an arrow.
    Top,
    /// Left of an arrow.
    Arrow,
    /// Head or argument of an application.
    Appl,
}

fn parens_if(parens: bool, f: Format) -> Format {
    if parens {
        Format::text("(").then(f).then(Format::text(")"))
    } else {
        f
    }
}

fn sort(l: &Level) -> Format {
    let txt = match l {
        Level::Zero => String::from("Prop"),
        Level::Succ(l) if l.is_zero() => String::from("Type"),
        l => format!("Sort {}", l),
    };
    Format::Highlight(Box::new(Format::Text(txt)))
}

#[derive(Default)]
struct Printer {
    /// Names of the surrounding binders, outermost first.
    bound: Vec<String>,
}

impl Printer {
    /// Name of the de Bruijn variable, if its binder is in scope and named.
    fn bvar(&self, n: usize) -> String {
        match self.bound.iter().rev().nth(n) {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("β{}", n),
        }
    }

    /// Bracketed binder group, such as `(n : nat)` or `[inst : decidable p]`.
    fn group(&mut self, bind: &Binder) -> Format {
        let (open, close) = bind.kind.delimiters();
        let id = if bind.id.is_empty() { "_" } else { bind.id.as_str() };
        Format::text(open)
            .then(Format::text(id))
            .then(Format::text(" : "))
            .then(self.expr(&bind.ty, Prec::Top))
            .then(Format::text(close))
    }

    fn binder(&mut self, head: &str, bind: &Binder, body: &Expr, prec: Prec) -> Format {
        let group = self.group(bind);
        self.bound.push(bind.id.clone());
        let body = self.expr(body, Prec::Top);
        self.bound.pop();
        let out = Format::text(head)
            .then(Format::text(" "))
            .then(group)
            .then(Format::text(","))
            .then(Format::text(" ").then(body).nest(2));
        parens_if(prec >= Prec::Arrow, out)
    }

    fn expr(&mut self, e: &Expr, prec: Prec) -> Format {
        match e {
            Expr::Sort(l) => sort(l),
            Expr::Const(c) => Format::Tag(c.clone(), Box::new(Format::text(c.as_str()))),
            Expr::BVar(n) => Format::Text(self.bvar(*n)),
            Expr::Local(x) if x.is_empty() => Format::text("_"),
            Expr::Local(x) => Format::text(x.as_str()),
            Expr::Meta(m) => Format::Text(format!("?{}", m)),
            Expr::Appl(head, args) => {
                let mut out = self.expr(head, Prec::Appl);
                for arg in args {
                    out = out.then(Format::text(" ")).then(self.expr(arg, Prec::Appl));
                }
                parens_if(prec >= Prec::Appl, out)
            }
            Expr::Pi(bind, body) if bind.id.is_empty() => {
                let dom = self.expr(&bind.ty, Prec::Arrow);
                self.bound.push(String::new());
                let cod = self.expr(body, Prec::Top);
                self.bound.pop();
                parens_if(prec >= Prec::Arrow, dom.then(Format::text(" → ")).then(cod))
            }
            Expr::Pi(bind, body) => self.binder("Π", bind, body, prec),
            Expr::Lam(bind, body) => self.binder("λ", bind, body, prec),
            Expr::Let(bind, val, body) => {
                let group = Format::text("let ")
                    .then(Format::text(bind.id.as_str()))
                    .then(Format::text(" : "))
                    .then(self.expr(&bind.ty, Prec::Top))
                    .then(Format::text(" := "))
                    .then(self.expr(val, Prec::Top));
                self.bound.push(bind.id.clone());
                let body = self.expr(body, Prec::Top);
                self.bound.pop();
                let out = group
                    .then(Format::text(" in"))
                    .then(Format::text(" ").then(body).nest(2));
                parens_if(prec >= Prec::Arrow, out)
            }
            Expr::Macro(m, args) if args.is_empty() => Format::text(m.as_str()),
            Expr::Macro(m, args) => {
                let mut out = Format::text(m.as_str());
                for arg in args {
                    out = out.then(Format::text(" ")).then(self.expr(arg, Prec::Appl));
                }
                parens_if(prec >= Prec::Appl, out)
            }
        }
    }
}

/// Render an expression with no free de Bruijn variables.
///
/// Declared names are wrapped in [`Format::Tag`] and
/// sort keywords in [`Format::Highlight`].
///
/// ~~~
/// # use medio::{Binder, Expr, pp};
/// let nat = || Expr::Const("nat".into());
/// let ty = Expr::pi(Binder::new("n", nat()), nat());
/// assert_eq!(pp(&ty).flatten(), "Π (n : nat), nat");
///
/// let pred = Expr::pi(Binder::new("", nat()), Expr::prop());
/// assert_eq!(pp(&pred).flatten(), "nat → Prop");
/// ~~~
pub fn pp(e: &Expr) -> Format {
    Printer::default().expr(e, Prec::Top)
}

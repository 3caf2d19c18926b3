//! Expressions of the dependently typed core language.

use crate::{Level, Name};
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// De Bruijn variable.
pub type DeBruijn = usize;

/// How a binder is announced in surface syntax.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum BinderKind {
    #[default]
    Default,
    Implicit,
    StrictImplicit,
    InstImplicit,
}

impl BinderKind {
    /// Brackets surrounding a binder group of this kind.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Default => ("(", ")"),
            Self::Implicit => ("{", "}"),
            Self::StrictImplicit => ("⦃", "⦄"),
            Self::InstImplicit => ("[", "]"),
        }
    }
}

/// Binder occurrence; the `x : A` in `λ x : A, t`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Binder {
    /// Bound name; empty for anonymous binders.
    pub id: String,
    pub kind: BinderKind,
    pub ty: Box<Expr>,
}

impl Binder {
    /// Explicit binder with the given name and type.
    pub fn new(id: impl Into<String>, ty: Expr) -> Self {
        let id = id.into();
        let kind = BinderKind::Default;
        Self { id, kind, ty: Box::new(ty) }
    }

    /// Same binder with another kind.
    pub fn kind(self, kind: BinderKind) -> Self {
        Self { kind, ..self }
    }

    /// Is the bound name absent or machine-invented?
    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty() || self.id.starts_with('_')
    }

    pub fn map_ty(self, f: impl FnOnce(Expr) -> Expr) -> Self {
        let ty = Box::new(f(*self.ty));
        Self { ty, ..self }
    }
}

/// Expression in spine form: applications immediately carry all arguments.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Sort, such as `Prop` or `Type`.
    Sort(Level),
    /// Reference to a declared name.
    Const(Name),
    BVar(DeBruijn),
    /// Free variable.
    Local(String),
    /// Metavariable left over by elaboration.
    Meta(String),
    Appl(Box<Expr>, Vec<Expr>),
    Lam(Binder, Box<Expr>),
    Pi(Binder, Box<Expr>),
    Let(Binder, Box<Expr>, Box<Expr>),
    /// Host-expanded expression, such as `sorry`.
    Macro(String, Vec<Expr>),
}

const SORRY: &str = "sorry";

impl Expr {
    /// `Prop`, the sort of propositions.
    pub fn prop() -> Self {
        Self::Sort(Level::Zero)
    }

    /// `Type`, the sort of small types.
    pub fn typ() -> Self {
        Self::Sort(Level::Zero.succ())
    }

    /// The `sorry` placeholder.
    pub fn sorry() -> Self {
        Self::Macro(String::from(SORRY), Vec::new())
    }

    /// Apply arguments; an empty argument list creates no application node.
    pub fn apply(self, args: Vec<Expr>) -> Self {
        if args.is_empty() {
            self
        } else {
            Self::Appl(Box::new(self), args)
        }
    }

    pub fn pi(bind: Binder, body: Expr) -> Self {
        Self::Pi(bind, Box::new(body))
    }

    /// Non-dependent product `dom → cod`.
    pub fn arrow(dom: Expr, cod: Expr) -> Self {
        Self::pi(Binder::new("", dom), cod)
    }

    pub fn lam(bind: Binder, body: Expr) -> Self {
        Self::Lam(bind, Box::new(body))
    }

    /// Head of an application; any other expression is its own head.
    ///
    /// ~~~
    /// # use medio::Expr;
    /// let f = Expr::Const("f".into());
    /// let app = f.clone().apply(vec![Expr::BVar(0)]);
    /// assert_eq!(*app.head(), f);
    /// ~~~
    pub fn head(&self) -> &Self {
        match self {
            Self::Appl(head, _) => head.head(),
            _ => self,
        }
    }

    /// Does `sorry` occur anywhere in the expression?
    pub fn contains_sorry(&self) -> bool {
        match self {
            Self::Sort(_) | Self::Const(_) | Self::BVar(_) | Self::Local(_) | Self::Meta(_) => {
                false
            }
            Self::Appl(head, args) => {
                head.contains_sorry() || args.iter().any(Self::contains_sorry)
            }
            Self::Lam(bind, body) | Self::Pi(bind, body) => {
                bind.ty.contains_sorry() || body.contains_sorry()
            }
            Self::Let(bind, val, body) => {
                bind.ty.contains_sorry() || val.contains_sorry() || body.contains_sorry()
            }
            Self::Macro(m, args) => m == SORRY || args.iter().any(Self::contains_sorry),
        }
    }

    pub fn apply_subst<S>(self, subst: &S, k: usize) -> Self
    where
        S: Fn(DeBruijn, usize) -> Expr,
    {
        match self {
            Self::BVar(n) if n >= k => subst(n, k),
            Self::Appl(head, args) => {
                let head = head.apply_subst(subst, k);
                let args = args.into_iter().map(|a| a.apply_subst(subst, k)).collect();
                Self::Appl(Box::new(head), args)
            }
            Self::Lam(bind, body) => Self::Lam(
                bind.map_ty(|ty| ty.apply_subst(subst, k)),
                Box::new(body.apply_subst(subst, k + 1)),
            ),
            Self::Pi(bind, body) => Self::Pi(
                bind.map_ty(|ty| ty.apply_subst(subst, k)),
                Box::new(body.apply_subst(subst, k + 1)),
            ),
            Self::Let(bind, val, body) => Self::Let(
                bind.map_ty(|ty| ty.apply_subst(subst, k)),
                Box::new(val.apply_subst(subst, k)),
                Box::new(body.apply_subst(subst, k + 1)),
            ),
            Self::Macro(m, args) => {
                Self::Macro(m, args.into_iter().map(|a| a.apply_subst(subst, k)).collect())
            }
            _ => self,
        }
    }

    /// Substitute the innermost bound variable with a closed expression.
    ///
    /// The substitute must not contain free de Bruijn variables.
    ///
    /// ~~~
    /// # use medio::Expr;
    /// let f = Expr::Const("f".into());
    /// let x = Expr::Const("x".into());
    /// let app = f.clone().apply(vec![Expr::BVar(0), Expr::BVar(1)]);
    /// assert_eq!(app.instantiate(&x), f.apply(vec![x, Expr::BVar(0)]));
    /// ~~~
    pub fn instantiate(self, sub: &Expr) -> Self {
        let subst = |n, k| if n == k { sub.clone() } else { Self::BVar(n - 1) };
        self.apply_subst(&subst, 0)
    }

    /// Split leading products into binders and a conclusion.
    ///
    /// Each bound variable is replaced by a [`Expr::Local`] of its binder's
    /// name, so the returned parts contain no dangling de Bruijn indices.
    ///
    /// ~~~
    /// # use medio::{Binder, Expr};
    /// let nat = || Expr::Const("nat".into());
    /// let le = Expr::Const("le".into());
    /// let ty = Expr::pi(
    ///     Binder::new("n", nat()),
    ///     Expr::pi(Binder::new("m", nat()), le.clone().apply(vec![Expr::BVar(1), Expr::BVar(0)])),
    /// );
    /// let (binders, concl) = ty.open_pis();
    /// assert_eq!(binders.len(), 2);
    /// let (n, m) = (Expr::Local("n".into()), Expr::Local("m".into()));
    /// assert_eq!(concl, le.apply(vec![n, m]));
    /// ~~~
    pub fn open_pis(self) -> (Vec<Binder>, Expr) {
        let mut binders = Vec::new();
        let mut tm = self;
        while let Expr::Pi(bind, body) = tm {
            tm = body.instantiate(&Expr::Local(bind.id.clone()));
            binders.push(bind);
        }
        (binders, tm)
    }
}


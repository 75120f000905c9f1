// Shared test helpers
//
// - init_tracing(): installs a tracing subscriber once per test binary
// - PageDriver: runs scripts in the Boa JavaScript engine against a fake Ext page
// - RecordingDriver: records scripts and replays canned responses

#![allow(dead_code)]

use async_trait::async_trait;
use boa_engine::{Context, Source};
use extjs_component::{Error, Result, ScriptDriver};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Minimal Ext JS stand-in: a component tree, `Ext.ComponentQuery.query`
/// with the ` `, `>` and `^` combinators, `xtype`, `*` and `[attr=value]`
/// selectors, and per-component `getId()`, `query()` and `el.dom`.
const EXT_FIXTURE: &str = r#"
var Ext = (function () {
    var autoId = 1000;
    var roots = [];

    function Component(xtype, config, children) {
        this.xtype = xtype;
        this.id = config.id || (xtype + '-' + (++autoId));
        for (var key in config) {
            if (key !== 'id') {
                this[key] = config[key];
            }
        }
        this.items = [];
        this.ownerCt = null;
        this.rendered = true;
        this.el = { dom: { id: this.id, tagName: 'DIV' } };
        var list = children || [];
        for (var i = 0; i < list.length; i++) {
            list[i].ownerCt = this;
            this.items.push(list[i]);
        }
    }

    Component.prototype.getId = function () { return this.id; };
    Component.prototype.getTitle = function () { return this.title; };
    Component.prototype.setTitle = function (title) { this.title = title; return this.title; };
    Component.prototype.isVisible = function () { return !this.hidden; };
    Component.prototype.fail = function () { throw new Error('fail() always throws'); };
    Component.prototype.query = function (selector) { return query(selector, this); };
    Component.prototype.destroy = function () {
        var list = this.ownerCt ? this.ownerCt.items : roots;
        list.splice(list.indexOf(this), 1);
        this.ownerCt = null;
    };

    function descendants(component) {
        var result = [];
        for (var i = 0; i < component.items.length; i++) {
            result.push(component.items[i]);
            result = result.concat(descendants(component.items[i]));
        }
        return result;
    }

    function all() {
        var result = [];
        for (var i = 0; i < roots.length; i++) {
            result.push(roots[i]);
            result = result.concat(descendants(roots[i]));
        }
        return result;
    }

    function ancestors(component) {
        var result = [];
        for (var owner = component.ownerCt; owner; owner = owner.ownerCt) {
            result.push(owner);
        }
        return result;
    }

    function parseSimple(token) {
        var match = /^([\w\-]+|\*)?((?:\[[^\]]+\])*)$/.exec(token);
        if (!match) {
            throw new Error('Invalid ComponentQuery selector: "' + token + '"');
        }
        var attrs = [];
        var attrRe = /\[([\w\-]+)=([^\]]*)\]/g;
        var m;
        while ((m = attrRe.exec(match[2])) !== null) {
            attrs.push({ name: m[1], value: m[2].replace(/^"(.*)"$/, '$1') });
        }
        return { xtype: match[1] || '*', attrs: attrs };
    }

    function matches(component, simple) {
        if (simple.xtype !== '*' && component.xtype !== simple.xtype) {
            return false;
        }
        for (var i = 0; i < simple.attrs.length; i++) {
            if (String(component[simple.attrs[i].name]) !== simple.attrs[i].value) {
                return false;
            }
        }
        return true;
    }

    function related(component, combinator) {
        if (combinator === '>') {
            return component ? component.items : roots;
        }
        if (combinator === '^') {
            return component ? ancestors(component) : [];
        }
        return component ? descendants(component) : all();
    }

    function query(selector, root) {
        var tokens = selector.replace(/^\s+|\s+$/g, '').split(/\s+/);
        var current = null;
        var combinator = ' ';
        for (var i = 0; i < tokens.length; i++) {
            var token = tokens[i];
            if (token === '>' || token === '^') {
                combinator = token;
                continue;
            }
            var simple = parseSimple(token);
            var sources = current === null ? [root] : current;
            var next = [];
            for (var j = 0; j < sources.length; j++) {
                var candidates = related(sources[j], current === null ? ' ' : combinator);
                for (var k = 0; k < candidates.length; k++) {
                    if (matches(candidates[k], simple) && next.indexOf(candidates[k]) < 0) {
                        next.push(candidates[k]);
                    }
                }
            }
            current = next;
            combinator = ' ';
        }
        return current || [];
    }

    return {
        create: function (xtype, config, children) {
            return new Component(xtype, config || {}, children);
        },
        add: function (component) {
            roots.push(component);
            return component;
        },
        ComponentQuery: {
            query: function (selector) { return query(selector, null); }
        },
        Array: {
            each: function (array, fn) {
                for (var i = 0; i < array.length; i++) {
                    fn(array[i], i);
                }
            }
        }
    };
})();

Ext.add(
    Ext.create('viewport', { id: 'main' }, [
        Ext.create('taskForm', { id: 'task-form', title: 'New Task' }, [
            Ext.create('textfield', { id: 'title-field', name: 'title', value: '' }),
            Ext.create('treepicker', { id: 'list-picker', name: 'list' }),
            Ext.create('datefield', { id: 'due-field', name: 'due', value: '01/01/2017' }),
            Ext.create('container', { id: 'buttons' }, [
                Ext.create('button', { id: 'save', text: 'Save' }),
                Ext.create('button', { id: 'cancel', text: 'Cancel', hidden: true })
            ])
        ]),
        Ext.create('taskGrid', { id: 'task-grid', title: 'Tasks' }, [
            Ext.create('gridview', { id: 'task-view', all: { elements: [] } })
        ]),
        Ext.create('panel', { id: 'empty-panel', count: 3 })
    ])
);
"#;

/// `ScriptDriver` evaluating scripts against the fake Ext page.
///
/// Every evaluation starts from a fresh engine: the fixture runs, then every
/// statement passed to `run_in_page` so far, then the script. Elements are
/// the DOM node ids.
pub struct PageDriver {
    page_changes: Mutex<Vec<String>>,
    scripts: Mutex<Vec<String>>,
    disconnected: AtomicBool,
}

impl PageDriver {
    pub fn new() -> Self {
        Self {
            page_changes: Mutex::new(Vec::new()),
            scripts: Mutex::new(Vec::new()),
            disconnected: AtomicBool::new(false),
        }
    }

    /// Applies `statement` to the page for all later evaluations
    pub fn run_in_page(&self, statement: &str) {
        self.page_changes
            .lock()
            .unwrap()
            .push(statement.to_string());
    }

    /// Makes every later evaluation fail like a closed session
    pub fn disconnect(&self) {
        self.disconnected.store(true, Ordering::SeqCst);
    }

    /// Scripts evaluated so far
    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }

    fn run(&self, script: &str, tail: &str) -> Result<String> {
        self.scripts.lock().unwrap().push(script.to_string());
        if self.disconnected.load(Ordering::SeqCst) {
            return Err(Error::Driver("session closed".to_string()));
        }

        let mut code = String::from(EXT_FIXTURE);
        for change in self.page_changes.lock().unwrap().iter() {
            code.push_str(change);
            code.push_str(";\n");
        }
        code.push_str("var __result = (function () {\n");
        code.push_str(script);
        code.push_str("\n})();\n");
        code.push_str(tail);

        let mut context = Context::default();
        let value = context
            .eval(Source::from_bytes(code.as_bytes()))
            .map_err(|e| Error::evaluation(script, e.to_string()))?;
        let text = value
            .to_string(&mut context)
            .map_err(|e| Error::evaluation(script, e.to_string()))?;
        Ok(text.to_std_string_escaped())
    }
}

#[async_trait]
impl ScriptDriver for PageDriver {
    type Element = String;

    async fn evaluate(&self, script: &str) -> Result<Value> {
        let json = self.run(
            script,
            "__result === undefined ? 'null' : JSON.stringify(__result);",
        )?;
        serde_json::from_str(&json).map_err(Error::from)
    }

    async fn evaluate_element(&self, script: &str) -> Result<String> {
        self.run(
            script,
            "if (!__result || !__result.tagName) { throw new TypeError('not a DOM node'); }\n\
             __result.id;",
        )
    }
}

/// `ScriptDriver` recording scripts and replaying queued responses.
///
/// With nothing queued, evaluations return `null`.
pub struct RecordingDriver {
    responses: Mutex<VecDeque<Result<Value>>>,
    scripts: Mutex<Vec<String>>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            scripts: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, response: Result<Value>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }

    fn next(&self, script: &str) -> Result<Value> {
        self.scripts.lock().unwrap().push(script.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

#[async_trait]
impl ScriptDriver for RecordingDriver {
    type Element = Value;

    async fn evaluate(&self, script: &str) -> Result<Value> {
        self.next(script)
    }

    async fn evaluate_element(&self, script: &str) -> Result<Value> {
        self.next(script)
    }
}
